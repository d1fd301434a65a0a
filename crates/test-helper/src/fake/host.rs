use alloc::sync::Arc;

use display_info::{ConnectionProperties, Module, ModuleHost, ModuleObserver};
use parking_lot::Mutex;

use super::FakeDisplay;

/// A loaded module, optionally exposing display properties.
pub struct FakeModule {
    callsign: String,
    properties: Option<Arc<FakeDisplay>>,
}

impl FakeModule {
    pub fn new(callsign: &str, properties: Option<Arc<FakeDisplay>>) -> Arc<Self> {
        Arc::new(Self {
            callsign: callsign.to_owned(),
            properties,
        })
    }
}

impl Module for FakeModule {
    fn callsign(&self) -> &str {
        &self.callsign
    }

    fn connection_properties(&self) -> Option<Arc<dyn ConnectionProperties>> {
        let properties = Arc::clone(self.properties.as_ref()?);
        Some(properties as Arc<dyn ConnectionProperties>)
    }
}

/// A plugin host that replays its module list to every new observer.
#[derive(Default)]
pub struct FakeHost {
    modules: Mutex<Vec<Arc<FakeModule>>>,
    observers: Mutex<Vec<Arc<dyn ModuleObserver>>>,
}

impl FakeHost {
    /// Loads a module and reports it to the registered observers.
    pub fn load(&self, module: Arc<FakeModule>) {
        self.modules.lock().push(Arc::clone(&module));

        let observers = self.observers.lock().clone();
        for observer in observers {
            let module = Arc::clone(&module);
            observer.state_change(module);
        }
    }

    /// Unloads every module with the given callsign.
    pub fn unload(&self, callsign: &str) {
        self.modules
            .lock()
            .retain(|module| module.callsign != callsign);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.lock().len()
    }
}

impl ModuleHost for FakeHost {
    fn register(&self, observer: &Arc<dyn ModuleObserver>) {
        let modules = self.modules.lock().clone();
        for module in modules {
            observer.state_change(module);
        }

        self.observers.lock().push(Arc::clone(observer));
    }

    fn unregister(&self, observer: &Arc<dyn ModuleObserver>) {
        self.observers
            .lock()
            .retain(|existing| !Arc::ptr_eq(existing, observer));
    }
}
