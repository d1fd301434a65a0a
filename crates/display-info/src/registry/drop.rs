use std::thread;

use tracing::error;

use super::Registry;

impl Drop for Registry {
    fn drop(&mut self) {
        let displays = self.displays.get_mut();

        if displays.is_empty() {
            return;
        }

        for (name, proxy) in displays.iter() {
            error!("{name}: still holds {} references", proxy.references());
        }

        if thread::panicking() {
            return;
        }

        panic!(
            "Registry dropped with {} displays still referenced",
            displays.len()
        );
    }
}
