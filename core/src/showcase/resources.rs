//! # Scoped Resources
//!
//! A resource is acquired when constructed and released when dropped. Values
//! in one scope drop in reverse declaration order, so the last resource
//! opened is the first one closed.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceAction {
    Opened,
    InUse,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEvent {
    pub name: String,
    pub action: ResourceAction,
}

impl fmt::Display for ResourceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.action {
            ResourceAction::Opened => "opened",
            ResourceAction::InUse => "in use",
            ResourceAction::Closed => "closed",
        };
        write!(f, "{} {}", self.name, action)
    }
}

/// Shared, append-only record of resource lifecycle events.
#[derive(Debug, Clone, Default)]
pub struct ResourceLog(Rc<RefCell<Vec<ResourceEvent>>>);

impl ResourceLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, name: &str, action: ResourceAction) {
        let event = ResourceEvent {
            name: name.to_string(),
            action,
        };
        debug!("{event}");
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<ResourceEvent> {
        self.0.borrow().clone()
    }
}

pub struct ScopedResource {
    name: String,
    log: ResourceLog,
}

impl ScopedResource {
    pub fn open(name: impl Into<String>, log: &ResourceLog) -> Self {
        let name = name.into();
        log.record(&name, ResourceAction::Opened);
        Self {
            name,
            log: log.clone(),
        }
    }

    pub fn use_resource(&self) {
        self.log.record(&self.name, ResourceAction::InUse);
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for ScopedResource {
    fn drop(&mut self) {
        self.log.record(&self.name, ResourceAction::Closed);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReport {
    pub events: Vec<ResourceEvent>,
}

pub fn demonstrate() -> ResourceReport {
    let log = ResourceLog::new();

    {
        let res1 = ScopedResource::open("Resource 1", &log);
        let res2 = ScopedResource::open("Resource 2", &log);

        res1.use_resource();
        res2.use_resource();
    }

    ResourceReport {
        events: log.events(),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
