use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::cancellation::GenerationToken;
use crate::core::actions::render_frame::{FrameRequest, RenderFrameError, render_frame};
use log::{debug, error, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

type PendingRequest = Option<(u64, Arc<FrameRequest>)>;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<PendingRequest>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

impl SharedState {
    fn pending(&self) -> MutexGuard<'_, PendingRequest> {
        // the slot holds plain data, a panic elsewhere cannot leave it half-written
        self.latest_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation.load(Ordering::Acquire)
    }
}

/// Renders the most recently submitted frame on a dedicated worker thread.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `request`, superseding anything not yet presented.
    pub fn submit_request(&self, request: Arc<FrameRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        *self.shared.pending() = Some((generation, request));
        self.shared.wake.notify_one();

        debug!("submitted render generation {generation}");
        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                error!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.pending();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token =
                GenerationToken::new(job_generation, &shared.generation, &shared.shutdown);

            let start = Instant::now();
            let result = render_frame(&request, &cancel_token);
            let render_duration = start.elapsed();

            let event = match result {
                Ok(pixel_buffer) => RenderEvent::Frame(FrameData {
                    generation: job_generation,
                    pixel_buffer,
                    render_duration,
                }),
                Err(RenderFrameError::Cancelled(_)) => {
                    debug!("render generation {job_generation} cancelled");
                    continue;
                }
                Err(err) => RenderEvent::Error(RenderError {
                    generation: job_generation,
                    message: err.to_string(),
                }),
            };

            if !shared.is_current(job_generation) {
                debug!("dropping stale generation {job_generation}");
                continue;
            }

            match &event {
                RenderEvent::Frame(frame) => debug!(
                    "generation {} rendered in {:?}",
                    frame.generation, frame.render_duration
                ),
                RenderEvent::Error(err) => warn!("{err}"),
            }

            shared.presenter_port.present(event);

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::core::data::palette::Palettes;
    use crate::core::data::point::Point;
    use crate::core::data::view_state::ViewState;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::mandelbrot::explorer_config::ExplorerConfig;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<RenderEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<RenderEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl InteractiveControllerPresenterPort for MockPresenterPort {
        fn present(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn wait_for_events(sink: &MockPresenterPort, timeout: Duration) -> Vec<RenderEvent> {
        let start = Instant::now();
        loop {
            let events = sink.take_events();
            if !events.is_empty() || start.elapsed() >= timeout {
                return events;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn start() -> (Arc<MockPresenterPort>, InteractiveController) {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let controller = InteractiveController::new(
            Arc::clone(&presenter_port) as Arc<dyn InteractiveControllerPresenterPort>
        );

        (presenter_port, controller)
    }

    fn create_test_request(viewport: Viewport) -> Arc<FrameRequest> {
        let request = ExplorerConfig::default()
            .build_frame_request(&ViewState::default(), viewport)
            .expect("test request is valid");

        Arc::new(request)
    }

    #[test]
    fn test_submit_request_emits_frame() {
        let (presenter_port, mut controller) = start();
        let viewport = Viewport::new(4, 4);

        let generation = controller.submit_request(create_test_request(viewport));
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));

        assert_eq!(events.len(), 1, "expected exactly one render event");
        match &events[0] {
            RenderEvent::Frame(frame) => {
                assert_eq!(frame.generation, generation);
                assert_eq!(frame.viewport(), viewport);
                assert_eq!(frame.pixel_buffer.buffer().len(), 4 * 4 * 3);
            }
            RenderEvent::Error(error) => panic!("unexpected render error: {error}"),
        }

        controller.shutdown();
    }

    #[test]
    fn test_frame_matches_direct_render() {
        let (presenter_port, mut controller) = start();
        let request = create_test_request(Viewport::new(8, 6));
        let expected = render_frame(&request, &|| false).unwrap();

        controller.submit_request(Arc::clone(&request));
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));

        match events.first() {
            Some(RenderEvent::Frame(frame)) => assert_eq!(frame.pixel_buffer, expected),
            other => panic!("expected a frame, got {other:?}"),
        }

        controller.shutdown();
    }

    #[test]
    fn test_generation_ids_increment() {
        let (presenter_port, mut controller) = start();
        let request = create_test_request(Viewport::new(4, 4));

        controller.submit_request(Arc::clone(&request));
        let gen_a = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2))[0].generation();

        controller.submit_request(Arc::clone(&request));
        let gen_b = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2))[0].generation();

        assert!(gen_b > gen_a, "generation B ({gen_b}) should exceed A ({gen_a})");

        controller.shutdown();
    }

    #[test]
    fn test_last_completed_generation_starts_at_zero() {
        let (_presenter_port, mut controller) = start();

        assert_eq!(controller.last_completed_generation(), 0);

        controller.shutdown();
    }

    #[test]
    fn test_last_completed_generation_updates_after_frame_completion() {
        let (presenter_port, mut controller) = start();

        let submitted = controller.submit_request(create_test_request(Viewport::new(4, 4)));
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));

        assert_eq!(events[0].generation(), submitted);
        assert_eq!(controller.last_completed_generation(), submitted);

        controller.shutdown();
    }

    #[test]
    fn test_rapid_requests_do_not_emit_cancellation_errors() {
        let (presenter_port, mut controller) = start();
        let request = create_test_request(Viewport::new(64, 64));

        let mut last_generation = 0;
        for _ in 0..5 {
            last_generation = controller.submit_request(Arc::clone(&request));
        }

        let deadline = Instant::now() + Duration::from_secs(5);
        while controller.last_completed_generation() < last_generation && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }
        let events = presenter_port.take_events();

        assert!(events.iter().all(|e| matches!(e, RenderEvent::Frame(_))));
        let newest = events.iter().map(RenderEvent::generation).max();
        assert_eq!(newest, Some(last_generation));
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let (_presenter_port, mut controller) = start();

        controller.shutdown();
        controller.shutdown();
    }

    #[test]
    fn test_palettes_reach_the_frame() {
        let (presenter_port, mut controller) = start();
        let config = ExplorerConfig::default();
        let mut view = ViewState::default();
        // red background, visible where points escape immediately
        view.select_colours(0, 1, Palettes::default().len());
        let request = config.build_frame_request(&view, Viewport::new(10, 10)).unwrap();

        controller.submit_request(Arc::new(request));
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));

        let RenderEvent::Frame(frame) = &events[0] else {
            panic!("expected a frame");
        };
        let corner = frame.pixel_buffer.pixel(Point { x: 0, y: 0 }).unwrap();
        assert_eq!((corner.r, corner.g, corner.b), (128, 0, 0));

        controller.shutdown();
    }
}
