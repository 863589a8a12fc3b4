#![allow(dead_code)]

use resource_framework::{
    require_text, ActorStore, Lifecycle, LinkBuilder, ResourceKind, ResourceService,
    StateMachine, UnknownVariant, ValidationError,
};
use std::fmt;
use std::str::FromStr;
use tokio::task::JoinHandle;

// --- Test Kind ---

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub name: String,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Cancel,
    Complete,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Cancelled => "CANCELLED",
        })
    }
}

impl FromStr for TaskStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "COMPLETED" => Ok(TaskStatus::Completed),
            "CANCELLED" => Ok(TaskStatus::Cancelled),
            other => Err(UnknownVariant::new("task status", other)),
        }
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskAction::Cancel => "cancel",
            TaskAction::Complete => "complete",
        })
    }
}

impl FromStr for TaskAction {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cancel" => Ok(TaskAction::Cancel),
            "complete" => Ok(TaskAction::Complete),
            other => Err(UnknownVariant::new("task action", other)),
        }
    }
}

impl Lifecycle for TaskStatus {
    type Action = TaskAction;

    const INITIAL: Self = TaskStatus::InProgress;
    const ALL: &'static [Self] = &[
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Cancelled,
    ];
    const TRANSITIONS: &'static [(Self, TaskAction, Self)] = &[
        (TaskStatus::InProgress, TaskAction::Cancel, TaskStatus::Cancelled),
        (TaskStatus::InProgress, TaskAction::Complete, TaskStatus::Completed),
    ];
}

impl ResourceKind for Task {
    type Status = TaskStatus;

    const NAME: &'static str = "task";
    const COLLECTION: &'static str = "tasks";

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

// --- Fixtures ---

pub const BASE_URL: &str = "http://localhost:8080";

pub type TaskService = ResourceService<Task, ActorStore<Task>>;

/// A service over freshly spawned shards, plus the shard handles.
pub fn spawn_service(shards: usize) -> (TaskService, Vec<JoinHandle<()>>) {
    let (store, handles) = ActorStore::<Task>::spawn(shards, 16);
    let service = ResourceService::new(store, LinkBuilder::new(BASE_URL, StateMachine::new()));
    (service, handles)
}

/// Drops the service (and with it every store handle) and waits for the shards.
pub async fn shutdown(service: TaskService, handles: Vec<JoinHandle<()>>) {
    drop(service);
    for handle in handles {
        handle.await.expect("shard task panicked");
    }
}
