//! Event wiring between the browser and the controller.
//!
//! Browser callbacks become [`Command`]s; returned [`Effect`]s become timers,
//! listeners and intersection observation. Closures live for the page
//! lifetime and are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use js_sys::Array;
use layout_core::{Command, Effect, ResponsiveConfig, ResponsiveController};
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent,
};

use crate::dom::WebDom;
use crate::WebError;

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub struct Runtime {
    controller: ResponsiveController<WebDom>,
    observer: Option<IntersectionObserver>,
}

pub type SharedRuntime = Rc<RefCell<Runtime>>;

impl Runtime {
    pub fn new(dom: WebDom, config: ResponsiveConfig) -> SharedRuntime {
        Rc::new(RefCell::new(Self {
            controller: ResponsiveController::new(dom, config),
            observer: None,
        }))
    }

    pub fn is_touch_device(&mut self) -> bool {
        self.controller.is_touch_device()
    }
}

/// Dispatch one command and carry out what it asks for. The runtime borrow
/// is released before any effect runs.
pub fn run(shared: &SharedRuntime, command: Command<Element>) {
    let effects = shared.borrow_mut().controller.dispatch(command);
    for effect in effects {
        execute(shared, effect);
    }
}

fn execute(shared: &SharedRuntime, effect: Effect<Element>) {
    match effect {
        Effect::Schedule { delay_ms, command } => {
            let shared = shared.clone();
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                run(&shared, command);
            });
        }
        Effect::Bind {
            target,
            event,
            command,
        } => {
            let shared = shared.clone();
            let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_event: Event| {
                run(&shared, command.clone());
            }));
            if let Err(err) =
                target.add_event_listener_with_callback(event.name(), closure.as_ref().unchecked_ref())
            {
                warn!(event = event.name(), "listener not attached: {err:?}");
            }
            closure.forget();
        }
        Effect::Observe { target } => match reveal_observer(shared) {
            Ok(observer) => observer.observe(&target),
            Err(err) => {
                // Without an observer the element would stay hidden.
                warn!(%err, "scroll reveal unavailable, showing element");
                run(shared, Command::BecameVisible { target });
            }
        },
    }
}

fn reveal_observer(shared: &SharedRuntime) -> Result<IntersectionObserver, WebError> {
    if let Some(observer) = shared.borrow().observer.clone() {
        return Ok(observer);
    }
    let callback_rt = shared.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    run(&callback_rt, Command::BecameVisible { target });
                }
            }
        },
    ));
    let init = IntersectionObserverInit::new();
    init.set_threshold(&REVEAL_THRESHOLD.into());
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    shared.borrow_mut().observer = Some(observer.clone());
    Ok(observer)
}

/// Document- and window-level listeners that carry event payloads.
pub fn wire_globals(shared: &SharedRuntime) -> Result<(), WebError> {
    let (window, document) = {
        let rt = shared.borrow();
        let dom = rt.controller.dom();
        (dom.window().clone(), dom.document().clone())
    };

    {
        let shared = shared.clone();
        let closure = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            run(&shared, Command::ResizeObserved);
        }));
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let shared = shared.clone();
        let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
            if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                run(&shared, Command::DocumentClick { target });
            }
        }));
        document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let shared = shared.clone();
        let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
            if let Ok(key_event) = event.dyn_into::<KeyboardEvent>() {
                run(
                    &shared,
                    Command::KeyDown {
                        key: key_event.key(),
                    },
                );
            }
        }));
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
