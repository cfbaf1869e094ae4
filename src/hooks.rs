use futures::future::{abortable, AbortHandle};
use std::future::Future;
use yew::prelude::*;
use yew_hooks::{use_mount, use_unmount};

/// Handle to a single-shot task whose body is dropped unrun once cancelled.
#[derive(Debug, Default)]
pub struct MountTask {
	abort: Option<AbortHandle>,
}
impl MountTask {
	/// Wraps `future` so it can be cancelled through the returned handle.
	/// The wrapper resolves once the body finished or was cancelled.
	pub fn new<Fut>(target: &'static str, future: Fut) -> (Self, impl Future<Output = ()>)
	where
		Fut: Future<Output = ()>,
	{
		let (task, abort) = abortable(future);
		let task = async move {
			if task.await.is_err() {
				log::debug!(target: target, "mount task aborted before completion");
			}
		};
		(Self { abort: Some(abort) }, task)
	}

	pub fn cancel(&mut self) {
		if let Some(abort) = self.abort.take() {
			abort.abort();
		}
	}
}

/// Spawns `make_future` once, when the component first mounts.
///
/// The task is cancelled when the component unmounts, so a late completion
/// never reaches state belonging to a torn down view. The future is
/// responsible for delivering its own result (e.g. through a reducer dispatcher).
#[hook]
pub fn use_mount_task<F, Fut>(target: &'static str, make_future: F)
where
	F: FnOnce() -> Fut + 'static,
	Fut: Future<Output = ()> + 'static,
{
	let handle = use_mut_ref(MountTask::default);
	use_mount({
		let handle = handle.clone();
		move || {
			let (task, future) = MountTask::new(target, make_future());
			*handle.borrow_mut() = task;
			wasm_bindgen_futures::spawn_local(future);
		}
	});
	use_unmount(move || handle.borrow_mut().cancel());
}
