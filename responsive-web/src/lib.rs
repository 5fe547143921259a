//! Browser host for `layout_core`: wires the responsive controller to the
//! live document and exposes a small `ResponsiveUtils` surface to page
//! scripts.

mod error;

pub use error::WebError;

#[cfg(target_arch = "wasm32")]
pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod logging;
#[cfg(target_arch = "wasm32")]
pub mod runtime;

#[cfg(target_arch = "wasm32")]
mod exports {
    use std::cell::RefCell;

    use js_sys::{Object, Reflect};
    use layout_core::{Command, ResponsiveConfig};
    use tracing::{info, warn};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::Element;

    use crate::dom::WebDom;
    use crate::runtime::{self, Runtime, SharedRuntime};
    use crate::{config, logging, WebError};

    thread_local! {
        static RUNTIME: RefCell<Option<SharedRuntime>> = const { RefCell::new(None) };
    }

    fn current() -> Result<SharedRuntime, WebError> {
        RUNTIME
            .with(|rt| rt.borrow().clone())
            .ok_or(WebError::NotStarted)
    }

    fn boot(config: ResponsiveConfig) -> Result<(), WebError> {
        if RUNTIME.with(|rt| rt.borrow().is_some()) {
            return Ok(());
        }
        let dom = WebDom::from_window()?;
        let shared = Runtime::new(dom, config);
        RUNTIME.with(|rt| *rt.borrow_mut() = Some(shared.clone()));
        runtime::wire_globals(&shared)?;
        runtime::run(&shared, Command::Init);
        install_utils()?;
        info!("responsive layer ready");
        Ok(())
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let config = config::load_config();
        let level = config
            .as_ref()
            .map(|c| c.log_level.as_str())
            .unwrap_or("warn");
        logging::init(level);
        let config = config.unwrap_or_else(|err| {
            warn!(%err, global = config::CONFIG_GLOBAL, "ignoring page configuration");
            ResponsiveConfig::default()
        });

        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        if document.ready_state() != "loading" {
            return Ok(boot(config)?);
        }
        // Body may not exist yet; wait for the parser.
        let closure = Closure::once(move || {
            if let Err(err) = boot(config) {
                warn!(%err, "responsive layer failed to start");
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    #[wasm_bindgen]
    pub fn toggle_mobile_menu() -> Result<(), JsValue> {
        runtime::run(&current()?, Command::ToggleMenu);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn close_mobile_menu() -> Result<(), JsValue> {
        runtime::run(&current()?, Command::CloseMenu);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn make_tables_responsive() -> Result<(), JsValue> {
        runtime::run(&current()?, Command::AdaptTables);
        Ok(())
    }

    /// Re-read one table's headers, e.g. after the page replaced them.
    #[wasm_bindgen]
    pub fn refresh_table(table: Element) -> Result<(), JsValue> {
        runtime::run(&current()?, Command::RebindTable { table });
        Ok(())
    }

    #[wasm_bindgen]
    pub fn add_loading_state(button: Element) -> Result<(), JsValue> {
        runtime::run(&current()?, Command::ShowLoading { control: button });
        Ok(())
    }

    #[wasm_bindgen]
    pub fn is_touch_device() -> Result<bool, JsValue> {
        let shared = current()?;
        let touch = shared.borrow_mut().is_touch_device();
        Ok(touch)
    }

    fn set_fn(target: &Object, name: &str, value: &JsValue) -> Result<(), WebError> {
        Reflect::set(target, &JsValue::from_str(name), value)?;
        Ok(())
    }

    /// `window.ResponsiveUtils` for inline page scripts.
    fn install_utils() -> Result<(), WebError> {
        let utils = Object::new();
        let toggle = Closure::<dyn FnMut()>::new(|| {
            let _ = toggle_mobile_menu();
        });
        set_fn(&utils, "toggleMobileMenu", toggle.as_ref())?;
        let close = Closure::<dyn FnMut()>::new(|| {
            let _ = close_mobile_menu();
        });
        set_fn(&utils, "closeMobileMenu", close.as_ref())?;
        let tables = Closure::<dyn FnMut()>::new(|| {
            let _ = make_tables_responsive();
        });
        set_fn(&utils, "makeTablesResponsive", tables.as_ref())?;
        let loading = Closure::<dyn FnMut(JsValue)>::new(|button: JsValue| {
            if let Ok(button) = button.dyn_into::<Element>() {
                let _ = add_loading_state(button);
            }
        });
        set_fn(&utils, "addLoadingState", loading.as_ref())?;
        let touch = Closure::<dyn FnMut() -> bool>::new(|| is_touch_device().unwrap_or(false));
        set_fn(&utils, "isTouchDevice", touch.as_ref())?;

        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        set_fn(&window, "ResponsiveUtils", &utils)?;

        toggle.forget();
        close.forget();
        tables.forget();
        loading.forget();
        touch.forget();
        Ok(())
    }
}
