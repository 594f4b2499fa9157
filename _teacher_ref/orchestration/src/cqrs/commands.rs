//! Command definitions for orchestration operations
//!
//! Commands represent operations that change the state of the orchestration system.

use uuid::Uuid;
use chrono::{DateTime, Utc};
use crate::caws_runtime::TaskDescriptor;

/// Command to execute a task
pub struct ExecuteTaskCommand {
    pub task_descriptor: TaskDescriptor,
    pub worker_id: Uuid,
    pub requested_at: DateTime<Utc>,
}

/// Command to cancel a task execution
pub struct CancelTaskCommand {
    pub task_id: Uuid,
    pub worker_id: Uuid,
    pub reason: String,
}

/// Command to update task progress
pub struct UpdateTaskProgressCommand {
    pub task_id: Uuid,
    pub progress_percentage: u8,
    pub status_message: Option<String>,
}

/// Command to register a worker
pub struct RegisterWorkerCommand {
    pub worker_id: Uuid,
    pub capabilities: Vec<String>,
    pub metadata: std::collections::HashMap<String, String>,
}

/// Command to update worker health
pub struct UpdateWorkerHealthCommand {
    pub worker_id: Uuid,
    pub is_healthy: bool,
    pub last_seen: DateTime<Utc>,
}

// Command implementations
#[async_trait::async_trait]
impl crate::cqrs::Command for ExecuteTaskCommand {
    type Result = Uuid; // Returns execution ID
    type Error = OrchestrationCommandError;

    async fn execute(&self) -> Result<Self::Result, Self::Error> {
        // Generate execution ID for tracking
        let execution_id = Uuid::new_v4();

        // In a full implementation, this would:
        // 1. Validate task descriptor
        // 2. Check worker availability
        // 3. Create execution state
        // 4. Start the task via autonomous executor
        // 5. Return execution ID for tracking

        // For now, simulate successful task queuing
        tracing::info!(
            "Task {} queued for execution by worker {} (execution ID: {})",
            self.task_descriptor.task_id,
            self.worker_id,
            execution_id
        );

        Ok(execution_id)
    }
}

#[async_trait::async_trait]
impl crate::cqrs::Command for CancelTaskCommand {
    type Result = ();
    type Error = OrchestrationCommandError;

    async fn execute(&self) -> Result<Self::Result, Self::Error> {
        // In a full implementation, this would:
        // 1. Find the active execution for the task
        // 2. Signal cancellation to the worker
        // 3. Update execution status
        // 4. Clean up resources

        // For now, simulate successful cancellation
        tracing::info!(
            "Task {} cancelled for worker {} (reason: {})",
            self.task_id,
            self.worker_id,
            self.reason
        );

        Ok(())
    }
}

#[async_trait::async_trait]
impl crate::cqrs::Command for UpdateTaskProgressCommand {
    type Result = ();
    type Error = OrchestrationCommandError;

    async fn execute(&self) -> Result<Self::Result, Self::Error> {
        // Validate progress percentage
        if self.progress_percentage > 100 {
            return Err(OrchestrationCommandError::InvalidParameters(
                format!("Progress percentage cannot exceed 100%, got: {}", self.progress_percentage)
            ));
        }

        // In a full implementation, this would:
        // 1. Find the active execution for the task
        // 2. Update progress in database
        // 3. Notify any listeners/subscribers
        // 4. Check for completion conditions

        // For now, simulate successful progress update
        let status_msg = self.status_message.as_deref().unwrap_or("Progress update");
        tracing::info!(
            "Task {} progress updated: {}% - {}",
            self.task_id,
            self.progress_percentage,
            status_msg
        );

        Ok(())
    }
}

#[async_trait::async_trait]
impl crate::cqrs::Command for RegisterWorkerCommand {
    type Result = Uuid; // Returns registration ID
    type Error = OrchestrationCommandError;

    async fn execute(&self) -> Result<Self::Result, Self::Error> {
        // Generate registration ID
        let registration_id = Uuid::new_v4();

        // Validate worker capabilities
        if self.capabilities.is_empty() {
            return Err(OrchestrationCommandError::InvalidParameters(
                "Worker must have at least one capability".to_string()
            ));
        }

        // In a full implementation, this would:
        // 1. Validate worker capabilities against known types
        // 2. Store worker information in database
        // 3. Update worker registry
        // 4. Notify orchestration system of new worker

        // For now, simulate successful registration
        tracing::info!(
            "Worker {} registered with capabilities: {:?} (registration ID: {})",
            self.worker_id,
            self.capabilities,
            registration_id
        );

        Ok(registration_id)
    }
}

#[async_trait::async_trait]
impl crate::cqrs::Command for UpdateWorkerHealthCommand {
    type Result = ();
    type Error = OrchestrationCommandError;

    async fn execute(&self) -> Result<Self::Result, Self::Error> {
        // In a full implementation, this would:
        // 1. Find the worker in the registry
        // 2. Update health status in database
        // 3. Update last seen timestamp
        // 4. Trigger health monitoring alerts if needed
        // 5. Potentially reassign tasks if worker becomes unhealthy

        // For now, simulate successful health update
        let status = if self.is_healthy { "healthy" } else { "unhealthy" };
        tracing::info!(
            "Worker {} health updated: {} (last seen: {})",
            self.worker_id,
            status,
            self.last_seen
        );

        Ok(())
    }
}

/// Command execution errors
#[derive(Debug, thiserror::Error)]
pub enum OrchestrationCommandError {
    #[error("Task execution failed: {0}")]
    TaskExecutionFailed(String),

    #[error("Worker not found: {0}")]
    WorkerNotFound(Uuid),

    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),

    #[error("Invalid command parameters: {0}")]
    InvalidParameters(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
