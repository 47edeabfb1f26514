#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Mirror the session store into component state and resume the stored session.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let store = Rc::clone(&app_state.store);
    let session = app_state.session.clone();
    use_effect_with((), move |()| {
        let subscription = store.subscribe(move |snapshot| session.set(snapshot.clone()));
        {
            let store = Rc::clone(&store);
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = store.restore().await {
                    log::warn!("session restore failed: {err}");
                }
            });
        }
        move || store.unsubscribe(subscription)
    });
}
