use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use display_info::{Config, EnumerationCache, Registry, raw};
use test_helper::{FakeDirectory, FakeDisplay, Mode, logger::setup_logger};
use tracing::info_span;

fn main() {
    let debug = std::env::args().any(|arg| arg.eq("--debug"));
    let _logger = setup_logger(debug).unwrap();

    let directory = FakeDirectory::new();
    directory.add_display("DisplayInfo", FakeDisplay::new(Mode::default()));
    directory.add_display(
        "Secondary",
        FakeDisplay::new(Mode {
            width: 3840,
            height: 2160,
            hdr: raw::HDR_10,
            hdcp: raw::HDCP_2X,
            ..Mode::default()
        }),
    );
    directory.add_module("Controller");

    let registry = Registry::new(Config::from_env(), directory);
    let cache = EnumerationCache::new();

    let mut index = 0;
    while let Some(name) = cache.name_at(&registry, index) {
        let _span = info_span!("Display", %name).entered();

        let Some(display) = registry.instance(&name) else {
            println!("{name}: unavailable");
            index += 1;
            continue;
        };

        println!(
            "{name}: {}x{}@{}Hz, HDR {}, {}, connected {}, audio passthrough {}",
            display.width(),
            display.height(),
            display.vertical_frequency(),
            display.hdr(),
            display.hdcp_protection(),
            display.connected(),
            display.is_audio_passthrough(),
        );

        let _ = display.release();
        index += 1;
    }
}
