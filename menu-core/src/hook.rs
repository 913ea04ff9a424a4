use std::fmt;

/// Identifies one handler registered on a [`Hook`] or [`InterceptChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// Payload-free notification point. Handlers run synchronously in the order
/// they were subscribed.
#[derive(Default)]
pub struct Hook {
    handlers: Vec<(HandlerId, Box<dyn FnMut()>)>,
    next_id: u64,
}

impl Hook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl FnMut() + 'static) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns `false` if the handler was already gone.
    pub fn unsubscribe(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    pub fn notify(&mut self) {
        for (_, handler) in &mut self.handlers {
            handler();
        }
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hook({} handlers)", self.handlers.len())
    }
}

/// Back-interception chain.
///
/// Interceptors are polled in registration order and the first one returning
/// `true` wins; the rest are not called.
#[derive(Default)]
pub struct InterceptChain {
    interceptors: Vec<(HandlerId, Box<dyn FnMut() -> bool>)>,
    next_id: u64,
}

impl InterceptChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, interceptor: impl FnMut() -> bool + 'static) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.interceptors.push((id, Box::new(interceptor)));
        id
    }

    pub fn remove(&mut self, id: HandlerId) -> bool {
        let before = self.interceptors.len();
        self.interceptors.retain(|(interceptor_id, _)| *interceptor_id != id);
        self.interceptors.len() != before
    }

    pub fn intercepted(&mut self) -> bool {
        self.interceptors.iter_mut().any(|(_, intercept)| intercept())
    }

    pub fn clear(&mut self) {
        self.interceptors.clear();
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}

impl fmt::Debug for InterceptChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InterceptChain({} interceptors)", self.interceptors.len())
    }
}
