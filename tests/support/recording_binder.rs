use std::sync::{Arc, Mutex};

use prevdays::adapter::outbound::binder::LazyBinderFactory;
use prevdays::port::{BindRequest, Binder, BinderFactory};

/// Binder factory that remembers every request before delegating to the lazy binder.
#[derive(Clone, Default)]
pub struct RecordingBinderFactory {
    requests: Arc<Mutex<Vec<BindRequest>>>,
}

impl RecordingBinderFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<BindRequest> {
        self.requests.lock().expect("lock bind requests").clone()
    }
}

impl BinderFactory for RecordingBinderFactory {
    fn bind(&self, request: BindRequest) -> Box<dyn Binder> {
        self.requests
            .lock()
            .expect("lock bind requests")
            .push(request.clone());
        LazyBinderFactory.bind(request)
    }
}
