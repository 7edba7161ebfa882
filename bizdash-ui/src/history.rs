//! Browser History
//!
//! [`History`] over `window.history`, `window.location.hash` and the
//! `hashchange` event. Each listener owns a JS closure that is detached
//! from the window when the listener is removed.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use bizdash::history::{FragmentListener, History, ListenerId};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HashChangeEvent, HashChangeEventInit};

const HASHCHANGE: &str = "hashchange";

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Handle to the page's history; clones share listeners
#[derive(Clone, Default)]
pub struct BrowserHistory {
    listeners: Rc<RefCell<HashMap<u64, Closure<dyn Fn()>>>>,
    next_id: Rc<Cell<u64>>,
    /// URL before the last `push_fragment`, reported as `oldURL`
    previous_url: Rc<RefCell<Option<String>>>,
}

impl BrowserHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl History for BrowserHistory {
    fn fragment(&self) -> String {
        current_hash()
    }

    fn push_fragment(&self, fragment: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let previous = window.location().href().ok();
        match window.history() {
            Ok(history) => {
                *self.previous_url.borrow_mut() = previous;
                if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(fragment)) {
                    tracing::warn!(fragment = %fragment, error = ?e, "pushState failed");
                }
            }
            Err(e) => tracing::warn!(error = ?e, "window.history unavailable"),
        }
    }

    fn notify_fragment_change(&self) {
        // pushState does not fire hashchange on its own
        let Some(window) = web_sys::window() else {
            return;
        };
        let new_url = window.location().href().unwrap_or_default();
        let old_url = self
            .previous_url
            .borrow_mut()
            .take()
            .unwrap_or_else(|| new_url.clone());

        let init = HashChangeEventInit::new();
        init.set_old_url(&old_url);
        init.set_new_url(&new_url);
        match HashChangeEvent::new_with_event_init_dict(HASHCHANGE, &init) {
            Ok(event) => {
                let _ = window.dispatch_event(&event);
            }
            Err(e) => tracing::warn!(error = ?e, "Could not create hashchange event"),
        }
    }

    fn add_listener(&self, listener: FragmentListener) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let closure = Closure::<dyn Fn()>::new(move || listener(&current_hash()));
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback(HASHCHANGE, closure.as_ref().unchecked_ref());
        }
        self.listeners.borrow_mut().insert(id, closure);

        ListenerId(id)
    }

    fn remove_listener(&self, id: ListenerId) {
        let Some(closure) = self.listeners.borrow_mut().remove(&id.0) else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(HASHCHANGE, closure.as_ref().unchecked_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn push_and_notify_dispatches_hashchange_with_urls() {
        let window = web_sys::window().unwrap();
        let seen = Rc::new(RefCell::new(None::<(String, String)>));

        let sink = Rc::clone(&seen);
        let raw = Closure::<dyn Fn(HashChangeEvent)>::new(move |event: HashChangeEvent| {
            *sink.borrow_mut() = Some((event.old_url(), event.new_url()));
        });
        window
            .add_event_listener_with_callback(HASHCHANGE, raw.as_ref().unchecked_ref())
            .unwrap();

        let history = BrowserHistory::new();
        let fragments = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&fragments);
        let id = history.add_listener(Rc::new(move |f: &str| log.borrow_mut().push(f.to_string())));

        let before = window.location().href().unwrap();
        history.push_fragment("#sales");
        history.notify_fragment_change();

        assert_eq!(history.fragment(), "#sales");
        assert_eq!(fragments.borrow().as_slice(), ["#sales".to_string()]);
        let (old_url, new_url) = seen.borrow().clone().unwrap();
        assert_eq!(old_url, before);
        assert!(new_url.ends_with("#sales"));

        history.remove_listener(id);
        window
            .remove_event_listener_with_callback(HASHCHANGE, raw.as_ref().unchecked_ref())
            .unwrap();
    }
}
