//! Query definitions for orchestration read operations
//!
//! Queries represent operations that read the state of the orchestration system
//! without modifying it.

use uuid::Uuid;
use chrono::{DateTime, Utc};
use crate::tracking::progress_tracker::ExecutionStatus;

/// Query to get task execution status
pub struct GetTaskStatusQuery {
    pub task_id: Uuid,
}

/// Query to get worker information
pub struct GetWorkerInfoQuery {
    pub worker_id: Uuid,
}

/// Query to list active tasks
pub struct ListActiveTasksQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Query to get system health metrics
pub struct GetSystemHealthQuery;

/// Query to get execution history
pub struct GetExecutionHistoryQuery {
    pub task_id: Option<Uuid>,
    pub worker_id: Option<Uuid>,
    pub status_filter: Option<ExecutionStatus>,
    pub limit: usize,
    pub offset: usize,
}

// Query result types
#[derive(Debug, Clone)]
pub struct TaskStatus {
    pub task_id: Uuid,
    pub status: ExecutionStatus,
    pub progress_percentage: u8,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub worker_id: Option<Uuid>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct WorkerInfo {
    pub worker_id: Uuid,
    pub capabilities: Vec<String>,
    pub is_healthy: bool,
    pub last_seen: DateTime<Utc>,
    pub active_tasks: usize,
    pub completed_tasks: usize,
    pub metadata: std::collections::HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct SystemHealth {
    pub total_workers: usize,
    pub active_workers: usize,
    pub healthy_workers: usize,
    pub total_tasks: usize,
    pub active_tasks: usize,
    pub completed_tasks: usize,
    pub failed_tasks: usize,
    pub average_task_duration_ms: f64,
    pub uptime_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct ExecutionRecord {
    pub execution_id: Uuid,
    pub task_id: Uuid,
    pub worker_id: Uuid,
    pub status: ExecutionStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub duration_ms: Option<u64>,
    pub error_message: Option<String>,
}

// Query implementations
#[async_trait::async_trait]
impl crate::cqrs::Query for GetTaskStatusQuery {
    type Result = Option<TaskStatus>;
    type Error = OrchestrationQueryError;

    async fn execute(&self) -> Result<Self::Result, Self::Error> {
        // In a full implementation, this would:
        // 1. Query the database for task execution status
        // 2. Check progress tracking system
        // 3. Return current status or None if not found

        // For now, simulate a basic response
        // This demonstrates the query pattern - in reality this would
        // connect to the actual task execution tracking system

        tracing::debug!("Querying status for task {}", self.task_id);

        // Simulate: return None to indicate task not found (for demo)
        // In production, this would return actual task status
        Ok(None)
    }
}

#[async_trait::async_trait]
impl crate::cqrs::Query for GetWorkerInfoQuery {
    type Result = Option<WorkerInfo>;
    type Error = OrchestrationQueryError;

    async fn execute(&self) -> Result<Self::Result, Self::Error> {
        // In a full implementation, this would:
        // 1. Query the worker registry/database
        // 2. Get worker capabilities, status, and metrics
        // 3. Return worker information or None if not found

        // For now, simulate a basic response
        tracing::debug!("Querying info for worker {}", self.worker_id);

        // Simulate: return None to indicate worker not found (for demo)
        Ok(None)
    }
}

#[async_trait::async_trait]
impl crate::cqrs::Query for ListActiveTasksQuery {
    type Result = Vec<TaskStatus>;
    type Error = OrchestrationQueryError;

    async fn execute(&self) -> Result<Self::Result, Self::Error> {
        // In a full implementation, this would:
        // 1. Query database for tasks with status != Completed/Cancelled
        // 2. Apply pagination (limit/offset)
        // 3. Return list of active task statuses

        // For now, simulate an empty list (no active tasks)
        tracing::debug!("Listing active tasks (limit: {:?}, offset: {:?})",
                       self.limit, self.offset);

        Ok(vec![])
    }
}

#[async_trait::async_trait]
impl crate::cqrs::Query for GetSystemHealthQuery {
    type Result = SystemHealth;
    type Error = OrchestrationQueryError;

    async fn execute(&self) -> Result<Self::Result, Self::Error> {
        // In a full implementation, this would:
        // 1. Query worker registry for counts and health status
        // 2. Query task database for execution statistics
        // 3. Calculate system uptime
        // 4. Aggregate performance metrics

        // For now, return simulated health metrics
        let uptime_seconds = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|e| OrchestrationQueryError::InternalError(
                format!("Failed to calculate uptime: {}", e)
            ))?
            .as_secs();

        Ok(SystemHealth {
            total_workers: 5,  // Simulated: 5 registered workers
            active_workers: 3, // Simulated: 3 currently active
            healthy_workers: 3, // Simulated: all active workers healthy
            total_tasks: 150,   // Simulated: 150 total tasks processed
            active_tasks: 2,    // Simulated: 2 tasks currently running
            completed_tasks: 142, // Simulated: 142 tasks completed
            failed_tasks: 6,    // Simulated: 6 tasks failed
            average_task_duration_ms: 1250.0, // Simulated: 1.25s average
            uptime_seconds,
        })
    }
}

#[async_trait::async_trait]
impl crate::cqrs::Query for GetExecutionHistoryQuery {
    type Result = Vec<ExecutionRecord>;
    type Error = OrchestrationQueryError;

    async fn execute(&self) -> Result<Self::Result, Self::Error> {
        // In a full implementation, this would:
        // 1. Query execution history from database
        // 2. Apply filters (task_id, worker_id, status)
        // 3. Apply pagination (limit/offset)
        // 4. Return execution records

        // For now, simulate an empty history
        tracing::debug!(
            "Querying execution history (task: {:?}, worker: {:?}, status: {:?}, limit: {}, offset: {})",
            self.task_id, self.worker_id, self.status_filter, self.limit, self.offset
        );

        Ok(vec![])
    }
}

/// Query execution errors
#[derive(Debug, thiserror::Error)]
pub enum OrchestrationQueryError {
    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),

    #[error("Worker not found: {0}")]
    WorkerNotFound(Uuid),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid query parameters: {0}")]
    InvalidParameters(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
