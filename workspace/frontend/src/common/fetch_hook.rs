use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, AbortSignal};
use yew::prelude::*;

use crate::hooks::{LaunchGuard, LoadState};

/// Runs `fetch_fn` once, right after the component first mounts, and stores
/// its successful result.
///
/// Later re-renders never launch it again. When the component unmounts
/// before the load finishes, the request is aborted through the signal handed
/// to `fetch_fn` and a late result is dropped instead of stored.
#[hook]
pub fn use_load_once<T, E, F, Fut>(fetch_fn: F) -> UseStateHandle<LoadState<T>>
where
    T: 'static,
    E: Display + 'static,
    F: FnOnce(Option<AbortSignal>) -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let load_state = use_state(LoadState::<T>::default);
    let guard = use_mut_ref(LaunchGuard::default);

    {
        let load_state = load_state.clone();
        use_effect_with((), move |_| {
            let controller = match AbortController::new() {
                Ok(controller) => Some(controller),
                Err(err) => {
                    log::warn!("AbortController unavailable, load cannot be cancelled: {:?}", err);
                    None
                }
            };
            let signal = controller.as_ref().map(AbortController::signal);

            let launched = launch_once(&guard, fetch_fn, signal.clone(), move |fut| {
                spawn_local(async move {
                    let aborted = || signal.as_ref().is_some_and(AbortSignal::aborted);
                    if let Some(next) = settle_load(fut, &*load_state, aborted).await {
                        load_state.set(next);
                    }
                });
            });
            log::debug!("One-time load launched: {}", launched);

            move || {
                if let Some(controller) = controller {
                    log::trace!("Aborting in-flight load");
                    controller.abort();
                }
            }
        });
    }

    load_state
}

/// Starts `fetch_fn` through `spawn` unless `guard` already granted a launch.
fn launch_once<A, F, Fut, S>(guard: &Rc<RefCell<LaunchGuard>>, fetch_fn: F, arg: A, spawn: S) -> bool
where
    F: FnOnce(A) -> Fut,
    S: FnOnce(Fut),
{
    if !guard.borrow_mut().try_launch() {
        return false;
    }
    spawn(fetch_fn(arg));
    true
}

/// Awaits the load and decides what, if anything, to store.
///
/// `aborted` is checked after completion, so a result arriving after the
/// owner went away never reaches the state slot.
async fn settle_load<T, E, Fut, A>(fut: Fut, current: &LoadState<T>, aborted: A) -> Option<LoadState<T>>
where
    E: Display,
    Fut: Future<Output = Result<T, E>>,
    A: Fn() -> bool,
{
    let outcome = fut.await;
    current.settle(outcome, aborted())
}
