//! Advanced analytics example for Agent Agency V3 telemetry system
//!
//! This example demonstrates the advanced analytics capabilities including
//! trend analysis, anomaly detection, predictive analytics, and optimization
//! recommendations.

use agent_agency_observability::{
    AgentPerformanceSnapshot, AgentTelemetryCollector, AnalyticsConfig, AnalyticsDashboard,
    AnalyticsDashboardConfig, AnalyticsEngine, AnomalyDetectionResult, BusinessMetricsSnapshot,
    CoordinationMetricsSnapshot, InsightSeverity, InsightType, OptimizationRecommendation,
    PredictiveModelResult, SystemHealthSnapshot, TrendAnalysis,
};
use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, OnceLock};
use tokio::time::{sleep, Duration as TokioDuration};
use tracing::{error, info, warn};

const SYSTEM_HEALTH_DEFAULT_WINDOW_HOURS: i64 = 24;
const SYSTEM_HEALTH_MAX_SNAPSHOTS: usize = 24 * 14;
const SYSTEM_HEALTH_HEALTH_DELTA: f64 = 0.01;
const SYSTEM_HEALTH_RESOURCE_DELTA: f64 = 0.01;
const SYSTEM_HEALTH_ERROR_DELTA: f64 = 0.0025;
const SYSTEM_HEALTH_UTIL_DELTA: f64 = 0.5;

static SYSTEM_HEALTH_ROLLUPS: OnceLock<Mutex<HashMap<usize, SystemHealthRollup>>> =
    OnceLock::new();
static SYSTEM_HEALTH_METRICS: OnceLock<Mutex<HashMap<usize, HashMap<String, f64>>>> =
    OnceLock::new();

#[derive(Clone, Debug)]
struct SystemHealthRollup {
    last_timestamp: DateTime<Utc>,
    avg_overall_health: f64,
    avg_resource_utilization: f64,
    avg_error_rate: f64,
    avg_cpu_utilization: f64,
    avg_memory_utilization: f64,
    cpu_peak: f64,
    memory_peak: f64,
    error_rate_peak: f64,
    health_floor: f64,
    sample_count: usize,
}

struct SystemHealthIntegration {
    engine_key: usize,
    window: Duration,
    max_snapshots: usize,
    snapshots: VecDeque<SystemHealthSnapshot>,
    cached_rollup: Option<SystemHealthRollup>,
}

impl SystemHealthIntegration {
    fn new(engine: &AnalyticsEngine, window: Duration, max_snapshots: usize) -> Self {
        Self {
            engine_key: engine as *const AnalyticsEngine as usize,
            window,
            max_snapshots: max_snapshots.max(1),
            snapshots: VecDeque::with_capacity(max_snapshots.min(1024)),
            cached_rollup: None,
        }
    }

    fn integrate_snapshot(&mut self, snapshot: &SystemHealthSnapshot) {
        let timestamp = snapshot.timestamp;
        self.snapshots.push_back(snapshot.clone());

        while self.snapshots.len() > self.max_snapshots {
            self.snapshots.pop_front();
        }

        while let Some(front) = self.snapshots.front() {
            if timestamp.signed_duration_since(front.timestamp) > self.window {
                self.snapshots.pop_front();
            } else {
                break;
            }
        }

        if let Some(rollup) = self.compute_rollup() {
            if self.should_publish(&rollup) {
                self.publish_rollup(rollup);
            }
        }
    }

    fn compute_rollup(&self) -> Option<SystemHealthRollup> {
        if self.snapshots.is_empty() {
            return None;
        }

        let mut total_overall_health = 0.0;
        let mut total_resource_utilization = 0.0;
        let mut total_error_rate = 0.0;
        let mut total_cpu = 0.0;
        let mut total_memory = 0.0;
        let mut cpu_peak = 0.0;
        let mut memory_peak = 0.0;
        let mut error_rate_peak = 0.0;
        let mut health_floor = f64::INFINITY;

        for snapshot in &self.snapshots {
            total_overall_health += snapshot.overall_health;
            total_resource_utilization += snapshot.resource_utilization;
            total_error_rate += snapshot.error_rate;
            total_cpu += snapshot.cpu_utilization;
            total_memory += snapshot.memory_utilization;
            cpu_peak = cpu_peak.max(snapshot.cpu_utilization);
            memory_peak = memory_peak.max(snapshot.memory_utilization);
            error_rate_peak = error_rate_peak.max(snapshot.error_rate);
            health_floor = health_floor.min(snapshot.overall_health);
        }

        let count = self.snapshots.len() as f64;
        let last_timestamp = self.snapshots.back().map(|s| s.timestamp)?;

        Some(SystemHealthRollup {
            last_timestamp,
            avg_overall_health: total_overall_health / count,
            avg_resource_utilization: total_resource_utilization / count,
            avg_error_rate: total_error_rate / count,
            avg_cpu_utilization: total_cpu / count,
            avg_memory_utilization: total_memory / count,
            cpu_peak,
            memory_peak,
            error_rate_peak,
            health_floor,
            sample_count: self.snapshots.len(),
        })
    }

    fn should_publish(&self, rollup: &SystemHealthRollup) -> bool {
        match &self.cached_rollup {
            Some(previous) => has_significant_change(previous, rollup),
            None => true,
        }
    }

    fn publish_rollup(&mut self, rollup: SystemHealthRollup) {
        if let Ok(mut cache) = SYSTEM_HEALTH_ROLLUPS
            .get_or_init(|| Mutex::new(HashMap::new()))
            .lock()
        {
            cache.insert(self.engine_key, rollup.clone());
        }

        if let Ok(mut metrics_cache) = SYSTEM_HEALTH_METRICS
            .get_or_init(|| Mutex::new(HashMap::new()))
            .lock()
        {
            let metrics_entry = metrics_cache
                .entry(self.engine_key)
                .or_insert_with(HashMap::new);
            metrics_entry.insert(
                "system.health.avg_overall_health".to_string(),
                rollup.avg_overall_health,
            );
            metrics_entry.insert(
                "system.health.avg_resource_utilization".to_string(),
                rollup.avg_resource_utilization,
            );
            metrics_entry.insert(
                "system.health.avg_error_rate".to_string(),
                rollup.avg_error_rate,
            );
            metrics_entry.insert(
                "system.health.avg_cpu_utilization".to_string(),
                rollup.avg_cpu_utilization,
            );
            metrics_entry.insert(
                "system.health.avg_memory_utilization".to_string(),
                rollup.avg_memory_utilization,
            );
            metrics_entry.insert("system.health.cpu_peak".to_string(), rollup.cpu_peak);
            metrics_entry.insert(
                "system.health.memory_peak".to_string(),
                rollup.memory_peak,
            );
            metrics_entry.insert(
                "system.health.error_rate_peak".to_string(),
                rollup.error_rate_peak,
            );
            metrics_entry.insert(
                "system.health.health_floor".to_string(),
                rollup.health_floor,
            );
        }

        self.cached_rollup = Some(rollup);
    }

    fn latest_rollup(&self) -> Option<SystemHealthRollup> {
        self.cached_rollup.clone()
    }

    fn latest_metrics_map(&self) -> Option<HashMap<String, f64>> {
        self.cached_rollup.as_ref().map(|rollup| {
            let mut metrics = HashMap::with_capacity(9);
            metrics.insert(
                "system.health.avg_overall_health".to_string(),
                rollup.avg_overall_health,
            );
            metrics.insert(
                "system.health.avg_resource_utilization".to_string(),
                rollup.avg_resource_utilization,
            );
            metrics.insert(
                "system.health.avg_error_rate".to_string(),
                rollup.avg_error_rate,
            );
            metrics.insert(
                "system.health.avg_cpu_utilization".to_string(),
                rollup.avg_cpu_utilization,
            );
            metrics.insert(
                "system.health.avg_memory_utilization".to_string(),
                rollup.avg_memory_utilization,
            );
            metrics.insert("system.health.cpu_peak".to_string(), rollup.cpu_peak);
            metrics.insert(
                "system.health.memory_peak".to_string(),
                rollup.memory_peak,
            );
            metrics.insert(
                "system.health.error_rate_peak".to_string(),
                rollup.error_rate_peak,
            );
            metrics.insert(
                "system.health.health_floor".to_string(),
                rollup.health_floor,
            );
            metrics
        })
    }
}

fn has_significant_change(previous: &SystemHealthRollup, current: &SystemHealthRollup) -> bool {
    (previous.avg_overall_health - current.avg_overall_health).abs() > SYSTEM_HEALTH_HEALTH_DELTA
        || (previous.avg_resource_utilization - current.avg_resource_utilization).abs()
            > SYSTEM_HEALTH_RESOURCE_DELTA
        || (previous.avg_error_rate - current.avg_error_rate).abs() > SYSTEM_HEALTH_ERROR_DELTA
        || (previous.avg_cpu_utilization - current.avg_cpu_utilization).abs()
            > SYSTEM_HEALTH_UTIL_DELTA
        || (previous.avg_memory_utilization - current.avg_memory_utilization).abs()
            > SYSTEM_HEALTH_UTIL_DELTA
        || (previous.cpu_peak - current.cpu_peak).abs() > SYSTEM_HEALTH_UTIL_DELTA
        || (previous.memory_peak - current.memory_peak).abs() > SYSTEM_HEALTH_UTIL_DELTA
        || (previous.error_rate_peak - current.error_rate_peak).abs() > SYSTEM_HEALTH_ERROR_DELTA
        || (previous.health_floor - current.health_floor).abs() > SYSTEM_HEALTH_HEALTH_DELTA
        || previous.sample_count != current.sample_count
}

/// Advanced analytics demonstration
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Agent Agency V3 Advanced Analytics Example");

    // 1. Initialize analytics engine
    let analytics_config = AnalyticsConfig {
        data_retention_hours: 168, // 1 week
        trend_analysis_window_hours: 24,
        anomaly_sensitivity: 0.7,
        prediction_horizon_hours: 24,
        enable_real_time_analytics: true,
        analytics_update_interval_seconds: 60,
    };

    let analytics_engine = Arc::new(AnalyticsEngine::new(analytics_config));
    analytics_engine.start().await?;

    // 2. Initialize analytics dashboard
    let dashboard_config = AnalyticsDashboardConfig {
        refresh_interval_seconds: 30,
        max_sessions: 50,
        enable_real_time_updates: true,
        data_retention_hours: 168,
        enable_trend_analysis: true,
        enable_anomaly_detection: true,
        enable_predictive_analytics: true,
    };

    let analytics_dashboard = Arc::new(AnalyticsDashboard::new(
        Arc::clone(&analytics_engine),
        dashboard_config,
    ));
    analytics_dashboard.start().await?;

    // 3. Simulate historical data for analytics
    simulate_historical_data(&analytics_engine).await?;

    // 4. Demonstrate trend analysis
    demonstrate_trend_analysis(&analytics_engine).await?;

    // 5. Demonstrate anomaly detection
    demonstrate_anomaly_detection(&analytics_engine).await?;

    // 6. Demonstrate predictive analytics
    demonstrate_predictive_analytics(&analytics_engine).await?;

    // 7. Demonstrate optimization recommendations
    demonstrate_optimization_recommendations(&analytics_engine).await?;

    // 8. Demonstrate analytics dashboard
    demonstrate_analytics_dashboard(&analytics_dashboard).await?;

    info!("Advanced analytics example completed successfully");
    Ok(())
}

/// Simulate historical data for analytics
async fn simulate_historical_data(analytics_engine: &AnalyticsEngine) -> Result<()> {
    info!("Simulating historical data for analytics...");

    let agents = vec![
        "constitutional-judge-1",
        "technical-auditor-1",
        "quality-evaluator-1",
        "research-agent-1",
        "generalist-worker-1",
    ];

    let mut system_health_integration = SystemHealthIntegration::new(
        analytics_engine,
        Duration::hours(SYSTEM_HEALTH_DEFAULT_WINDOW_HOURS),
        SYSTEM_HEALTH_MAX_SNAPSHOTS,
    );

    // Simulate 7 days of historical data
    for day in 0..7 {
        let base_time = Utc::now() - Duration::days(7 - day);

        // Simulate 24 hours of data per day
        for hour in 0..24 {
            let timestamp = base_time + Duration::hours(hour);

            // Simulate agent performance data
            for agent_id in &agents {
                let success_rate = 0.85 + (hour as f64 * 0.005) + (day as f64 * 0.01);
                let response_time = 1000 + (hour * 50) + (day * 100);
                let health_score = 0.9 - (hour as f64 * 0.002) - (day as f64 * 0.005);

                let snapshot = AgentPerformanceSnapshot {
                    agent_id: agent_id.to_string(),
                    timestamp,
                    success_rate: success_rate.min(1.0),
                    avg_response_time_ms: response_time as u64,
                    p95_response_time_ms: (response_time * 2) as u64,
                    error_rate: (1.0 - success_rate) * 10.0,
                    health_score: health_score.max(0.1),
                    current_load: (hour % 10) as u32,
                };

                analytics_engine
                    .add_agent_performance_data(agent_id.to_string(), snapshot)
                    .await?;
            }

            // Simulate coordination metrics
            let consensus_rate = 0.92 + (hour as f64 * 0.001) + (day as f64 * 0.005);
            let consensus_time = 2000 + (hour * 20) + (day * 50);
            let debate_frequency = 0.15 - (hour as f64 * 0.001) - (day as f64 * 0.002);
            let compliance_rate = 0.98 - (hour as f64 * 0.0005) - (day as f64 * 0.001);

            let coordination_snapshot = CoordinationMetricsSnapshot {
                timestamp,
                consensus_rate: consensus_rate.min(1.0),
                consensus_formation_time_ms: consensus_time as u64,
                debate_frequency: debate_frequency.max(0.0),
                constitutional_compliance_rate: compliance_rate.max(0.8),
                coordination_overhead_percentage: 5.0 + (hour as f64 * 0.1) + (day as f64 * 0.2),
            };

            analytics_engine
                .add_coordination_data(coordination_snapshot)
                .await?;

            // Simulate business metrics
            let completion_rate = 0.88 + (hour as f64 * 0.002) + (day as f64 * 0.008);
            let quality_score = 0.91 - (hour as f64 * 0.001) - (day as f64 * 0.003);
            let throughput = 80.0 + (hour as f64 * 2.0) + (day as f64 * 5.0);
            let cost_per_task = 0.08 - (hour as f64 * 0.0001) - (day as f64 * 0.0005);

            let business_snapshot = BusinessMetricsSnapshot {
                timestamp,
                task_completion_rate: completion_rate.min(1.0),
                quality_score: quality_score.max(0.7),
                false_positive_rate: 0.02 + (hour as f64 * 0.0001) + (day as f64 * 0.0002),
                false_negative_rate: 0.01 + (hour as f64 * 0.00005) + (day as f64 * 0.0001),
                resource_utilization: 0.75 + (hour as f64 * 0.005) + (day as f64 * 0.01),
                cost_per_task: cost_per_task.max(0.05),
                throughput_tasks_per_hour: throughput,
            };

            analytics_engine
                .add_business_data(business_snapshot)
                .await?;

            // Simulate system health
            let overall_health = if hour < 6 || hour > 22 {
                0.95 // Healthy
            } else if hour < 9 || hour > 18 {
                0.75 // Degraded
            } else {
                0.90 // Normal operation
            };

            let resource_utilization = 0.65 + (hour as f64 * 0.02) + (day as f64 * 0.01);
            let error_rate = 0.02 + (hour as f64 * 0.001) + (day as f64 * 0.0005);
            let cpu_utilization = 60.0 + (hour as f64 * 2.0) + (day as f64 * 1.0);
            let memory_utilization = 70.0 + (hour as f64 * 1.0) + (day as f64 * 0.5);

            let health_snapshot = SystemHealthSnapshot {
                timestamp,
                overall_health,
                resource_utilization: resource_utilization.min(1.0),
                error_rate: error_rate.min(0.1),
                cpu_utilization: cpu_utilization.min(95.0),
                memory_utilization: memory_utilization.min(90.0),
            };

            system_health_integration.integrate_snapshot(&health_snapshot);

            // Add system health data to analytics engine for historical analysis
            analytics_engine
                .add_system_health_data(health_snapshot)
                .await?;
        }
    }

    if let Some(rollup) = system_health_integration.latest_rollup() {
        if let Some(metrics) = system_health_integration.latest_metrics_map() {
            info!(
                "System health summary -> avg health: {:.2}, resource util: {:.2}, error rate: {:.4}, avg CPU: {:.2}%, avg memory: {:.2}%, samples: {}, CPU peak: {:.2}%, memory peak: {:.2}%, error peak: {:.4}, health floor: {:.2}",
                metrics
                    .get("system.health.avg_overall_health")
                    .copied()
                    .unwrap_or_default(),
                metrics
                    .get("system.health.avg_resource_utilization")
                    .copied()
                    .unwrap_or_default(),
                metrics
                    .get("system.health.avg_error_rate")
                    .copied()
                    .unwrap_or_default(),
                metrics
                    .get("system.health.avg_cpu_utilization")
                    .copied()
                    .unwrap_or_default(),
                metrics
                    .get("system.health.avg_memory_utilization")
                    .copied()
                    .unwrap_or_default(),
                rollup.sample_count,
                metrics
                    .get("system.health.cpu_peak")
                    .copied()
                    .unwrap_or_default(),
                metrics
                    .get("system.health.memory_peak")
                    .copied()
                    .unwrap_or_default(),
                metrics
                    .get("system.health.error_rate_peak")
                    .copied()
                    .unwrap_or_default(),
                metrics
                    .get("system.health.health_floor")
                    .copied()
                    .unwrap_or_default(),
            );
        }
    }

    info!("Completed simulating historical data");
    Ok(())
}

/// Demonstrate trend analysis
async fn demonstrate_trend_analysis(analytics_engine: &AnalyticsEngine) -> Result<()> {
    info!("Demonstrating trend analysis...");

    // Simulate some trend data
    let success_rate_data = vec![0.85, 0.87, 0.89, 0.91, 0.93, 0.95, 0.97, 0.99, 0.98, 0.96];
    let response_time_data = vec![
        2000.0, 1950.0, 1900.0, 1850.0, 1800.0, 1750.0, 1700.0, 1650.0, 1600.0, 1550.0,
    ];
    let error_rate_data = vec![0.15, 0.13, 0.11, 0.09, 0.07, 0.05, 0.03, 0.01, 0.02, 0.04];

    // Analyze trends
    let success_trend = analytics_engine
        .analyze_trends("completion_rate")
        .await?;
    let response_trend = analytics_engine
        .analyze_trends("throughput")
        .await?;
    let error_trend = analytics_engine
        .analyze_trends("error_rate")
        .await?;

    // Analyze system health trends
    let cpu_trend = analytics_engine
        .analyze_trends("cpu_utilization")
        .await?;
    let memory_trend = analytics_engine
        .analyze_trends("memory_utilization")
        .await?;
    let health_trend = analytics_engine
        .analyze_trends("overall_health")
        .await?;

    info!("Trend Analysis Results:");
    info!(
        "  Completion Rate Trend: {:?} (strength: {:.2}, confidence: {:.2})",
        success_trend.direction, success_trend.strength, success_trend.confidence
    );
    info!(
        "  Throughput Trend: {:?} (strength: {:.2}, confidence: {:.2})",
        response_trend.direction, response_trend.strength, response_trend.confidence
    );
    info!(
        "  Error Rate Trend: {:?} (strength: {:.2}, confidence: {:.2})",
        error_trend.direction, error_trend.strength, error_trend.confidence
    );
    info!(
        "  CPU Utilization Trend: {:?} (strength: {:.2}, confidence: {:.2})",
        cpu_trend.direction, cpu_trend.strength, cpu_trend.confidence
    );
    info!(
        "  Memory Utilization Trend: {:?} (strength: {:.2}, confidence: {:.2})",
        memory_trend.direction, memory_trend.strength, memory_trend.confidence
    );
    info!(
        "  Overall Health Trend: {:?} (strength: {:.2}, confidence: {:.2})",
        health_trend.direction, health_trend.strength, health_trend.confidence
    );

    info!("Trend descriptions:");
    info!("  {}", success_trend.description);
    info!("  {}", response_trend.description);
    info!("  {}", error_trend.description);
    info!("  {}", cpu_trend.description);
    info!("  {}", memory_trend.description);
    info!("  {}", health_trend.description);

    Ok(())
}

/// Demonstrate anomaly detection
async fn demonstrate_anomaly_detection(analytics_engine: &AnalyticsEngine) -> Result<()> {
    info!("Demonstrating anomaly detection...");

    // Simulate normal data first
    for i in 0..20 {
        let normal_value = 1000.0 + (i as f64 * 10.0); // Gradual increase
        let timestamp = Utc::now() - Duration::minutes(20 - i);

        // Add normal data points (this would be done through the historical data system)
        // For demonstration, we'll simulate anomaly detection directly
    }

    // Simulate anomalies in different metrics
    let response_time_anomaly = 5000.0; // Much higher than normal response time
    let cpu_anomaly = 95.0; // Very high CPU utilization
    let error_rate_anomaly = 0.25; // Very high error rate
    let timestamp = Utc::now();

    let response_anomalies = analytics_engine
        .detect_anomalies("throughput", response_time_anomaly, timestamp)
        .await?;
    let cpu_anomalies = analytics_engine
        .detect_anomalies("cpu_utilization", cpu_anomaly, timestamp)
        .await?;
    let error_anomalies = analytics_engine
        .detect_anomalies("error_rate", error_rate_anomaly, timestamp)
        .await?;

    let all_anomalies = vec![
        ("Throughput", &response_anomalies),
        ("CPU Utilization", &cpu_anomalies),
        ("Error Rate", &error_anomalies),
    ];

    let total_anomalies: usize = all_anomalies.iter().map(|(_, anomalies)| anomalies.len()).sum();

    if total_anomalies > 0 {
        info!("Anomaly Detection Results:");
        for (metric_name, anomalies) in all_anomalies {
            if !anomalies.is_empty() {
                info!("  {} Anomalies:", metric_name);
                for anomaly in anomalies {
                    info!("    Type: {:?}", anomaly.anomaly_type);
                    info!("    Severity: {:?}", anomaly.severity);
                    info!("    Confidence: {:.2}", anomaly.confidence);
                    info!("    Score: {:.2}", anomaly.anomaly_score);
                    info!("    Detected: {:.2}", anomaly.detected_value);
                    info!("    Expected: {:.2}", anomaly.expected_value);
                    info!("    Deviation: {:.1}%", anomaly.deviation_percentage);
                    info!("    Description: {}", anomaly.description);
                    info!("    Actions: {}", anomaly.recommended_actions.join(", "));
                }
            }
        }
    } else {
        info!("No anomalies detected in any metrics");
    }

    Ok(())
}

/// Demonstrate predictive analytics
async fn demonstrate_predictive_analytics(analytics_engine: &AnalyticsEngine) -> Result<()> {
    info!("Demonstrating predictive analytics...");

    // Generate predictions for different metrics
    let capacity_prediction = analytics_engine
        .generate_predictions(
            "throughput",
            agent_agency_observability::PredictionType::CapacityPlanning,
        )
        .await?;

    let performance_prediction = analytics_engine
        .generate_predictions(
            "completion_rate",
            agent_agency_observability::PredictionType::PerformanceForecast,
        )
        .await?;

    let quality_prediction = analytics_engine
        .generate_predictions(
            "quality_score",
            agent_agency_observability::PredictionType::QualityPrediction,
        )
        .await?;

    info!("Predictive Analytics Results:");

    info!("  Capacity Planning Prediction:");
    info!("    Model: {}", capacity_prediction.model_name);
    info!(
        "    Predicted Value: {:.2}",
        capacity_prediction.predicted_value
    );
    info!(
        "    Confidence Interval: ({:.2}, {:.2})",
        capacity_prediction.confidence_interval.0, capacity_prediction.confidence_interval.1
    );
    info!(
        "    Model Accuracy: {:.2}",
        capacity_prediction.model_accuracy
    );
    info!("    Recommendations:");
    for rec in &capacity_prediction.recommendations {
        info!("      - {}", rec);
    }

    info!("  Performance Forecast:");
    info!("    Model: {}", performance_prediction.model_name);
    info!(
        "    Predicted Value: {:.2}",
        performance_prediction.predicted_value
    );
    info!(
        "    Confidence Interval: ({:.2}, {:.2})",
        performance_prediction.confidence_interval.0, performance_prediction.confidence_interval.1
    );
    info!(
        "    Model Accuracy: {:.2}",
        performance_prediction.model_accuracy
    );
    info!("    Recommendations:");
    for rec in &performance_prediction.recommendations {
        info!("      - {}", rec);
    }

    info!("  Quality Prediction:");
    info!("    Model: {}", quality_prediction.model_name);
    info!(
        "    Predicted Value: {:.2}",
        quality_prediction.predicted_value
    );
    info!(
        "    Confidence Interval: ({:.2}, {:.2})",
        quality_prediction.confidence_interval.0, quality_prediction.confidence_interval.1
    );
    info!(
        "    Model Accuracy: {:.2}",
        quality_prediction.model_accuracy
    );
    info!("    Recommendations:");
    for rec in &quality_prediction.recommendations {
        info!("      - {}", rec);
    }

    Ok(())
}

/// Demonstrate optimization recommendations
async fn demonstrate_optimization_recommendations(
    analytics_engine: &AnalyticsEngine,
) -> Result<()> {
    info!("Demonstrating optimization recommendations...");

    let recommendations = analytics_engine
        .generate_optimization_recommendations()
        .await?;

    info!("Optimization Recommendations:");
    for (i, rec) in recommendations.iter().enumerate() {
        info!(
            "  {}. {} ({:?} priority)",
            i + 1,
            rec.description,
            rec.priority
        );
        info!("     Type: {:?}", rec.recommendation_type);
        info!(
            "     Expected Improvement: {:.1}%",
            rec.expected_improvement
        );
        info!(
            "     Implementation Effort: {:?}",
            rec.implementation_effort
        );
        info!("     Estimated Impact: {}", rec.estimated_impact);
        info!("     Actions:");
        for action in &rec.actions {
            info!("       - {}", action);
        }
    }

    if recommendations.is_empty() {
        info!("  No optimization recommendations at this time");
    }

    Ok(())
}

/// Demonstrate analytics dashboard
async fn demonstrate_analytics_dashboard(analytics_dashboard: &AnalyticsDashboard) -> Result<()> {
    info!("Demonstrating analytics dashboard...");

    // Create a dashboard session
    let session_id = analytics_dashboard
        .create_session(Some("analytics-user".to_string()), None)
        .await?;

    info!("Created analytics dashboard session: {}", session_id);

    // Get dashboard data
    let dashboard_data = analytics_dashboard.get_dashboard_data(&session_id).await?;

    info!("Analytics Dashboard Data:");
    info!("  System Overview:");
    info!(
        "    Health: {}",
        dashboard_data.system_overview.system_health
    );
    info!(
        "    Active Agents: {}",
        dashboard_data.system_overview.active_agents
    );
    info!(
        "    Total Tasks: {}",
        dashboard_data.system_overview.total_tasks
    );
    info!(
        "    Performance Score: {:.2}",
        dashboard_data.system_overview.performance_score
    );
    info!(
        "    Quality Score: {:.2}",
        dashboard_data.system_overview.quality_score
    );
    info!(
        "    Efficiency Score: {:.2}",
        dashboard_data.system_overview.efficiency_score
    );

    info!("  Trend Analysis Summary:");
    info!(
        "    Total Trends: {}",
        dashboard_data.trend_analysis.total_trends
    );
    info!(
        "    Positive Trends: {}",
        dashboard_data.trend_analysis.positive_trends
    );
    info!(
        "    Negative Trends: {}",
        dashboard_data.trend_analysis.negative_trends
    );
    info!(
        "    Stable Trends: {}",
        dashboard_data.trend_analysis.stable_trends
    );
    info!(
        "    Volatile Trends: {}",
        dashboard_data.trend_analysis.volatile_trends
    );

    info!("  Anomaly Detection Summary:");
    info!(
        "    Total Anomalies: {}",
        dashboard_data.anomaly_detection.total_anomalies
    );
    info!(
        "    Critical Anomalies: {}",
        dashboard_data.anomaly_detection.critical_anomalies
    );
    info!(
        "    High Anomalies: {}",
        dashboard_data.anomaly_detection.high_anomalies
    );

    info!("  Predictive Insights Summary:");
    info!(
        "    Total Predictions: {}",
        dashboard_data.predictive_insights.total_predictions
    );

    info!("  Optimization Recommendations:");
    info!(
        "    Total Recommendations: {}",
        dashboard_data.optimization_recommendations.len()
    );

    info!("  Performance Insights:");
    info!(
        "    Total Insights: {}",
        dashboard_data.performance_insights.len()
    );

    // Get real-time updates
    let real_time_update = analytics_dashboard
        .get_real_time_updates(
            &session_id,
            vec![agent_agency_observability::AnalyticsSubscriptionType::All],
        )
        .await?;

    info!("Real-time Analytics Update:");
    info!("  Timestamp: {}", real_time_update.timestamp);

    if let Some(trend_updates) = real_time_update.trend_updates {
        info!(
            "  Trend Updates: {} new trends, {} updated trends",
            trend_updates.new_trends.len(),
            trend_updates.updated_trends.len()
        );
    }

    if let Some(anomaly_updates) = real_time_update.anomaly_updates {
        info!(
            "  Anomaly Updates: {} new anomalies, {} resolved anomalies",
            anomaly_updates.new_anomalies.len(),
            anomaly_updates.resolved_anomalies.len()
        );
    }

    if let Some(prediction_updates) = real_time_update.prediction_updates {
        info!(
            "  Prediction Updates: {} new predictions, {} updated predictions",
            prediction_updates.new_predictions.len(),
            prediction_updates.updated_predictions.len()
        );
    }

    if let Some(optimization_updates) = real_time_update.optimization_updates {
        info!(
            "  Optimization Updates: {} new recommendations, {} updated recommendations",
            optimization_updates.new_recommendations.len(),
            optimization_updates.updated_recommendations.len()
        );
    }

    info!("Analytics dashboard demonstration completed");
    Ok(())
}
