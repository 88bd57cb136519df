//! Cancellable request context carrying an optional deadline.
//!
//! Every [`Client`](crate::Client) call takes a [`Context`]. The in-flight
//! round trip is abandoned as soon as the context's deadline passes or its
//! [`CancelHandle`] fires, and the call returns a transport error.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::errors::ContextError;

/// Deadline and cancellation scope for a request.
#[derive(Clone, Debug, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancel: Option<Arc<CancelNode>>,
}

impl Context {
    /// A context that never expires and cannot be cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derives a context that expires `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derives a context that expires at `deadline`. An earlier deadline
    /// already set on `self` is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) if current <= deadline => current,
            _ => deadline,
        });
        self
    }

    /// Derives a context together with the handle that cancels it.
    ///
    /// Cancelling `self` (or any of its ancestors) also cancels the derived
    /// context; cancelling the derived context leaves `self` untouched.
    pub fn with_cancel(self) -> (Self, CancelHandle) {
        let node = Arc::new(CancelNode::new(self.cancel.clone()));
        if let Some(parent) = &self.cancel {
            parent.adopt(&node);
        }
        let ctx = Self {
            deadline: self.deadline,
            cancel: Some(Arc::clone(&node)),
        };
        (ctx, CancelHandle { node })
    }

    /// The instant this context expires, if it has a deadline.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether this context or one of its ancestors has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|node| node.is_cancelled())
    }

    /// Why the context has ended, or `None` while it is still live.
    pub fn err(&self) -> Option<ContextError> {
        if self.is_cancelled() {
            return Some(ContextError::Canceled);
        }
        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => Some(ContextError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Resolves once the context ends. Pending forever on a background context.
    pub async fn done(&self) -> ContextError {
        if let Some(err) = self.err() {
            return err;
        }

        let cancelled = async {
            match &self.cancel {
                Some(node) => {
                    let mut rx = node.subscribe();
                    // The sender lives in the node we hold, so the channel cannot close.
                    let _ = rx.wait_for(|cancelled| *cancelled).await;
                }
                None => std::future::pending::<()>().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancelled => ContextError::Canceled,
            _ = expired => ContextError::DeadlineExceeded,
        }
    }
}

/// Cancels the [`Context`] it was created with, and every context derived from it.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    node: Arc<CancelNode>,
}

impl CancelHandle {
    /// Cancels the context. Calling it again has no effect.
    pub fn cancel(&self) {
        self.node.cancel();
    }
}

// Children hold their parent strongly and are held weakly in return, so a
// dropped context leaves nothing behind but a dead entry pruned on the next adopt.
#[derive(Debug)]
struct CancelNode {
    tx: watch::Sender<bool>,
    parent: Option<Arc<CancelNode>>,
    children: Mutex<Vec<Weak<CancelNode>>>,
}

impl CancelNode {
    fn new(parent: Option<Arc<CancelNode>>) -> Self {
        let (tx, _) = watch::channel(false);
        Self {
            tx,
            parent,
            children: Mutex::new(Vec::new()),
        }
    }

    fn children(&self) -> MutexGuard<'_, Vec<Weak<CancelNode>>> {
        self.children.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    fn adopt(&self, child: &Arc<CancelNode>) {
        {
            // Checked under the lock: `cancel` raises the flag before draining children.
            let mut children = self.children();
            if !self.is_cancelled() {
                children.retain(|c| c.strong_count() > 0);
                children.push(Arc::downgrade(child));
                return;
            }
        }
        child.cancel();
    }

    fn detach(&self, child: &CancelNode) {
        self.children()
            .retain(|c| c.strong_count() > 0 && !std::ptr::eq(c.as_ptr(), child));
    }

    fn cancel(&self) {
        if self.tx.send_replace(true) {
            return;
        }
        let children = std::mem::take(&mut *self.children());
        for child in children.iter().filter_map(Weak::upgrade) {
            child.cancel();
        }
        if let Some(parent) = &self.parent {
            parent.detach(self);
        }
    }
}
