use rusty_ls_protocols::{MemoryChannel, ProtocolSelector, SelectorConfig};

const SUPPORTED: [&str; 5] = ["SSLv2Hello", "SSLv3", "TLSv1", "TLSv1.1", "TLSv1.2"];
const ENABLED: [&str; 3] = ["SSLv3", "TLSv1.3", "TLSv1"];

pub fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    // optional config path as the first argument
    let selector = match std::env::args().nth(1) {
        Some(path) => SelectorConfig::from_path(path).unwrap().into_selector(),
        None => ProtocolSelector::default(),
    };

    let mut channel = MemoryChannel::with_protocols(SUPPORTED, ENABLED);
    println!("supported: {:?}", channel.supported());
    println!("enabled:   {:?}", channel.enabled());

    match selector.prepare_channel(&mut channel) {
        Ok(selection) => println!("selection: {:?}", selection),
        Err(never) => match never {},
    }
    println!("enabled:   {:?}", channel.enabled());
}
