use alloc::sync::Arc;
use core::mem;

use parking_lot::Mutex;
use tracing::trace;

use super::{Module, ModuleEntry, ModuleHost, ModuleObserver};

/// Collects the modules a host replays to a freshly registered observer.
#[derive(Default)]
struct Catalog {
    modules: Mutex<Vec<Arc<dyn Module>>>,
}

impl ModuleObserver for Catalog {
    fn state_change(&self, module: Arc<dyn Module>) {
        self.modules.lock().push(module);
    }
}

/// Registers and immediately unregisters an observer, then queries every module it was told
/// about for the display-properties interface.
pub(super) fn probe<H: ModuleHost + ?Sized>(host: &H) -> Vec<ModuleEntry> {
    let catalog = Arc::new(Catalog::default());
    let shared = Arc::clone(&catalog);
    let observer: Arc<dyn ModuleObserver> = shared;

    host.register(&observer);
    host.unregister(&observer);

    let modules = mem::take(&mut *catalog.modules.lock());

    modules
        .into_iter()
        .map(|module| {
            // Only presence matters, the interface is released right away.
            let display_properties = module.connection_properties().is_some();
            trace!("{}: display properties {}", module.callsign(), display_properties);

            ModuleEntry {
                name: module.callsign().to_owned(),
                display_properties,
            }
        })
        .collect()
}
