use lazy_static::lazy_static;
use parking_lot::ReentrantMutex;
use std::cell::RefCell;

use crate::config::PluginConfig;
use crate::handler::ConstructionLineHandler;
use crate::host::HostHandle;
use crate::host_wasm::WasmHost;

// Plugin state shared between the exported entry points. The host runtime is
// single-threaded, so the lock only guards against re-entrant exports; it is
// never held across an await (fetches complete before the state is touched,
// which is also why overlapping selections resolve in whatever order their
// responses arrive).
pub struct PluginState {
    pub handler: ConstructionLineHandler<WasmHost>,
    pub config: PluginConfig,
    pub wms_layer: Option<HostHandle>,
}

lazy_static! {
    static ref PLUGIN_STATE: ReentrantMutex<RefCell<PluginState>> =
        ReentrantMutex::new(RefCell::new(PluginState::new()));
}

impl PluginState {
    pub fn new() -> Self {
        let config = PluginConfig::default();
        PluginState {
            handler: ConstructionLineHandler::new(WasmHost::new(), config.clone()),
            config,
            wms_layer: None,
        }
    }

    pub fn with_mut<F, R>(f: F) -> R
    where
        F: FnOnce(&mut PluginState) -> R,
    {
        let guard = PLUGIN_STATE.lock();
        let mut borrow = guard.borrow_mut();
        f(&mut borrow)
    }

    pub fn with<F, R>(f: F) -> R
    where
        F: FnOnce(&PluginState) -> R,
    {
        let guard = PLUGIN_STATE.lock();
        let borrow = guard.borrow();
        f(&borrow)
    }
}

impl Default for PluginState {
    fn default() -> Self {
        PluginState::new()
    }
}
