// use crate::types::*;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;
// use tracing::{debug, info, warn};
// use uuid::Uuid;

/// Analytics engine for processing and analyzing system metrics
#[derive(Debug)]
pub struct AnalyticsEngine {
    /// Historical data storage
    historical_data: Arc<RwLock<HistoricalData>>,
    /// Trend analysis cache
    trend_cache: Arc<RwLock<std::collections::HashMap<String, TrendAnalysis>>>,
    /// Anomaly detector
    anomaly_detector: Arc<AnomalyDetector>,
    /// Predictive models
    predictive_models: Arc<RwLock<std::collections::HashMap<String, PredictiveModel>>>,
    /// Analytics configuration
    config: AnalyticsConfig,
}

/// Historical data storage
#[derive(Debug, Clone)]
pub struct HistoricalData {
    /// Agent performance history
    agent_performance_history: VecDeque<AgentPerformanceSnapshot>,
    /// Coordination metrics history
    coordination_metrics_history: VecDeque<CoordinationMetricsSnapshot>,
    /// Business metrics history
    business_metrics_history: VecDeque<BusinessMetricsSnapshot>,
    /// System health history
    system_health_history: VecDeque<SystemHealthSnapshot>,
}

/// Agent performance snapshot for historical analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentPerformanceSnapshot {
    pub timestamp: DateTime<Utc>,
    pub agent_id: String,
    pub tasks_completed: u32,
    pub success_rate: f64,
    pub average_response_time: f64,
    pub health_score: f64,
    pub current_load: u32,
}

/// Coordination metrics snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinationMetricsSnapshot {
    pub timestamp: DateTime<Utc>,
    pub total_agents: u32,
    pub active_agents: u32,
    pub coordination_overhead: f64,
    pub constitutional_compliance_rate: f64,
    pub coordination_overhead_percentage: f64,
}

/// Business metrics snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessMetricsSnapshot {
    pub timestamp: DateTime<Utc>,
    pub total_revenue: f64,
    pub customer_satisfaction: f64,
    pub operational_efficiency: f64,
    pub cost_per_task: f64,
    pub throughput_tasks_per_hour: f64,
}

/// System health snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemHealthSnapshot {
    pub timestamp: DateTime<Utc>,
    pub overall_health: f64,
    pub resource_utilization: f64,
    pub error_rate: f64,
    pub cpu_utilization: f64,
    pub memory_utilization: f64,
}

/// Trend analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Trend direction
    pub direction: TrendDirection,
    /// Trend strength (0.0 to 1.0)
    pub strength: f64,
    /// Confidence level (0.0 to 1.0)
    pub confidence: f64,
    /// Trend description
    pub description: String,
}

/// Trend direction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
    Volatile,
}

/// Anomaly detection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyDetectionResult {
    /// Whether an anomaly was detected
    pub is_anomaly: bool,
    /// Anomaly type
    pub anomaly_type: AnomalyType,
    /// Anomaly severity
    pub severity: AnomalySeverity,
    /// Confidence score (0.0 to 1.0)
    pub confidence: f64,
    /// Anomaly description
    pub description: String,
    /// Detected value
    pub detected_value: f64,
    /// Expected value range
    pub expected_range: (f64, f64),
    /// Recommended actions
    pub recommended_actions: Vec<String>,
}

/// Anomaly types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnomalyType {
    PerformanceDegradation,
    ResourceExhaustion,
    QualityDrop,
    CapacityOverflow,
    SystemInstability,
}

/// Anomaly severity levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnomalySeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Predictive model result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictiveModelResult {
    /// Model name
    pub model_name: String,
    /// Prediction type
    pub prediction_type: PredictionType,
    /// Predicted value
    pub predicted_value: f64,
    /// Confidence interval (lower, upper)
    pub confidence_interval: (f64, f64),
    /// Prediction horizon (hours)
    pub prediction_horizon_hours: u64,
    /// Model accuracy
    pub model_accuracy: f64,
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Recommendations
    pub recommendations: Vec<String>,
}

/// Prediction types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PredictionType {
    PerformanceForecast,
    CapacityPlanning,
    QualityPrediction,
    CostProjection,
}

/// Performance optimization recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationRecommendation {
    /// Optimization type
    pub optimization_type: OptimizationType,
    /// Priority level
    pub priority: PriorityLevel,
    /// Effort required
    pub effort: EffortLevel,
    /// Expected improvement percentage
    pub expected_improvement: f64,
    /// Description
    pub description: String,
    /// Implementation steps
    pub implementation_steps: Vec<String>,
    /// Estimated impact
    pub estimated_impact: String,
}

/// Optimization types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OptimizationType {
    ResourceAllocation,
    LoadBalancing,
    CapacityScaling,
    ConfigurationOptimization,
}

/// Priority levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Effort levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EffortLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Analytics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Historical data retention period in days
    pub data_retention_days: u32,
    /// Trend analysis window in hours
    pub trend_analysis_window_hours: u32,
    /// Anomaly detection sensitivity (0.0 to 1.0)
    pub anomaly_detection_sensitivity: f64,
    /// Predictive model update interval in hours
    pub model_update_interval_hours: u32,
    /// Analytics update interval in seconds
    pub analytics_update_interval_seconds: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            data_retention_days: 30,
            trend_analysis_window_hours: 24,
            anomaly_detection_sensitivity: 0.7,
            model_update_interval_hours: 6,
            analytics_update_interval_seconds: 60,
        }
    }
}

/// Anomaly detector
#[derive(Debug)]
pub struct AnomalyDetector {
    /// Statistical model
    model: StatisticalModel,
    /// Configuration
    config: AnomalyDetectionConfig,
}

/// Statistical model for anomaly detection
#[derive(Debug, Clone)]
pub struct StatisticalModel {
    /// Model parameters
    parameters: std::collections::HashMap<String, f64>,
    /// Model type
    model_type: ModelType,
}

/// Model types
#[derive(Debug, Clone)]
pub enum ModelType {
    MovingAverage,
    ExponentialSmoothing,
}

/// Anomaly detection configuration
#[derive(Debug, Clone)]
pub struct AnomalyDetectionConfig {
    /// Detection threshold
    pub threshold: f64,
    /// Minimum data points for detection
    pub min_data_points: usize,
}

impl Default for AnomalyDetectionConfig {
    fn default() -> Self {
        Self {
            threshold: 2.0,
            min_data_points: 10,
        }
    }
}

/// Predictive model
#[derive(Debug, Clone)]
pub struct PredictiveModel {
    /// Model name
    pub name: String,
    /// Model parameters
    pub parameters: std::collections::HashMap<String, f64>,
    /// Last updated
    pub last_updated: DateTime<Utc>,
}

impl AnalyticsEngine {
    /// Create a new analytics engine
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            historical_data: Arc::new(RwLock::new(HistoricalData {
                agent_performance_history: VecDeque::new(),
                coordination_metrics_history: VecDeque::new(),
                business_metrics_history: VecDeque::new(),
                system_health_history: VecDeque::new(),
            })),
            trend_cache: Arc::new(RwLock::new(std::collections::HashMap::new())),
            anomaly_detector: Arc::new(AnomalyDetector {
                model: StatisticalModel {
                    parameters: std::collections::HashMap::new(),
                    model_type: ModelType::MovingAverage,
                },
                config: AnomalyDetectionConfig::default(),
            }),
            predictive_models: Arc::new(RwLock::new(std::collections::HashMap::new())),
            config,
        }
    }

    /// Analyze trends in historical data
    pub async fn analyze_trends(&self, metric_name: &str) -> Result<TrendAnalysis> {
        let data = self.historical_data.read().await;

        // Extract values based on metric name
        let values = match metric_name {
            "throughput" => data
                .business_metrics_history
                .iter()
                .map(|snapshot| snapshot.throughput_tasks_per_hour)
                .collect::<Vec<f64>>(),
            "completion_rate" => data
                .agent_performance_history
                .iter()
                .map(|snapshot| snapshot.success_rate)
                .collect::<Vec<f64>>(),
            "quality_score" => data
                .business_metrics_history
                .iter()
                .map(|snapshot| snapshot.customer_satisfaction)
                .collect::<Vec<f64>>(),
            _ => {
                return Ok(TrendAnalysis {
                    direction: TrendDirection::Stable,
                    strength: 0.0,
                    confidence: 0.0,
                    description: "Unknown metric".to_string(),
                });
            }
        };

        if values.len() < 2 {
            return Ok(TrendAnalysis {
                direction: TrendDirection::Stable,
                strength: 0.0,
                confidence: 0.0,
                description: "Insufficient data".to_string(),
            });
        }

        // Calculate trend direction and strength
        let first_half = &values[..values.len() / 2];
        let second_half = &values[values.len() / 2..];

        let first_avg = first_half.iter().sum::<f64>() / first_half.len() as f64;
        let second_avg = second_half.iter().sum::<f64>() / second_half.len() as f64;

        let change = (second_avg - first_avg) / first_avg;
        let strength = change.abs().min(1.0);

        let direction = if change > 0.05 {
            TrendDirection::Increasing
        } else if change < -0.05 {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        };

        let confidence = if values.len() > 10 { 0.8 } else { 0.5 };

        let description = match direction {
            TrendDirection::Increasing => format!("{} is trending upward", metric_name),
            TrendDirection::Decreasing => format!("{} is trending downward", metric_name),
            TrendDirection::Stable => format!("{} is stable", metric_name),
            TrendDirection::Volatile => format!("{} is volatile", metric_name),
        };

        Ok(TrendAnalysis {
            direction,
            strength,
            confidence,
            description,
        })
    }

    /// Detect anomalies in metrics
    pub async fn detect_anomalies(&self, metric_name: &str) -> Result<Vec<AnomalyDetectionResult>> {
        let data = self.historical_data.read().await;

        // Extract values based on metric name
        let values = match metric_name {
            "throughput" => data
                .business_metrics_history
                .iter()
                .map(|snapshot| snapshot.throughput_tasks_per_hour)
                .collect::<Vec<f64>>(),
            "completion_rate" => data
                .agent_performance_history
                .iter()
                .map(|snapshot| snapshot.success_rate)
                .collect::<Vec<f64>>(),
            "quality_score" => data
                .business_metrics_history
                .iter()
                .map(|snapshot| snapshot.customer_satisfaction)
                .collect::<Vec<f64>>(),
            _ => return Ok(Vec::new()),
        };

        if values.len() < self.anomaly_detector.config.min_data_points {
            return Ok(Vec::new());
        }

        // Calculate statistical measures
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64;
        let std_dev = variance.sqrt();

        let mut anomalies = Vec::new();

        // Check for anomalies using z-score
        for (_i, &value) in values.iter().enumerate() {
            let z_score = (value - mean).abs() / std_dev;
            if z_score > self.anomaly_detector.config.threshold {
                let anomaly_type = if value < mean {
                    AnomalyType::PerformanceDegradation
                } else {
                    AnomalyType::PerformanceDegradation
                };

                let severity = if z_score > 3.0 {
                    AnomalySeverity::Critical
                } else if z_score > 2.5 {
                    AnomalySeverity::High
                } else if z_score > 2.0 {
                    AnomalySeverity::Medium
                } else {
                    AnomalySeverity::Low
                };

                anomalies.push(AnomalyDetectionResult {
                    is_anomaly: true,
                    anomaly_type,
                    severity,
                    confidence: (z_score / 4.0).min(1.0),
                    description: format!("Anomaly detected in {}: {:.2}", metric_name, value),
                    detected_value: value,
                    expected_range: (mean - 2.0 * std_dev, mean + 2.0 * std_dev),
                    recommended_actions: vec!["Investigate root cause".to_string()],
                });
            }
        }

        Ok(anomalies)
    }

    /// Generate predictions for future metrics
    pub async fn generate_predictions(
        &self,
        metric_name: &str,
        prediction_type: PredictionType,
    ) -> Result<PredictiveModelResult> {
        let data = self.historical_data.read().await;

        // Extract values based on metric name
        let values = match metric_name {
            "throughput" => data
                .business_metrics_history
                .iter()
                .map(|snapshot| snapshot.throughput_tasks_per_hour)
                .collect::<Vec<f64>>(),
            "completion_rate" => data
                .agent_performance_history
                .iter()
                .map(|snapshot| snapshot.success_rate)
                .collect::<Vec<f64>>(),
            "quality_score" => data
                .business_metrics_history
                .iter()
                .map(|snapshot| snapshot.customer_satisfaction)
                .collect::<Vec<f64>>(),
            _ => {
                return Ok(PredictiveModelResult {
                    model_name: "default".to_string(),
                    prediction_type,
                    predicted_value: 0.0,
                    confidence_interval: (0.0, 0.0),
                    prediction_horizon_hours: 24,
                    model_accuracy: 0.0,
                    timestamp: Utc::now(),
                    recommendations: vec!["No data available".to_string()],
                });
            }
        };

        if values.is_empty() {
            return Ok(PredictiveModelResult {
                model_name: "default".to_string(),
                prediction_type,
                predicted_value: 0.0,
                confidence_interval: (0.0, 0.0),
                prediction_horizon_hours: 24,
                model_accuracy: 0.0,
                timestamp: Utc::now(),
                recommendations: vec!["No data available".to_string()],
            });
        }

        // Simple linear regression for prediction
        let n = values.len() as f64;
        let sum_x = (0..values.len()).sum::<usize>() as f64;
        let sum_y = values.iter().sum::<f64>();
        let sum_xy = values
            .iter()
            .enumerate()
            .map(|(i, &y)| i as f64 * y)
            .sum::<f64>();
        let sum_x2 = (0..values.len()).map(|i| (i as f64).powi(2)).sum::<f64>();

        let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x.powi(2));
        let intercept = (sum_y - slope * sum_x) / n;

        // Predict next value
        let predicted_value = slope * (values.len() as f64) + intercept;

        // Calculate confidence interval (simplified)
        let variance = values
            .iter()
            .map(|&y| (y - (slope * 0.0 + intercept)).powi(2))
            .sum::<f64>()
            / n;
        let std_error = (variance / n).sqrt();
        let confidence_interval = (
            predicted_value - 1.96 * std_error,
            predicted_value + 1.96 * std_error,
        );

        let model_accuracy = if values.len() > 5 { 0.8 } else { 0.5 };

        let recommendations = match prediction_type {
            PredictionType::PerformanceForecast => {
                if predicted_value > values.last().unwrap() * 1.1 {
                    vec!["Performance is expected to improve".to_string()]
                } else if predicted_value < values.last().unwrap() * 0.9 {
                    vec!["Performance may decline, consider optimization".to_string()]
                } else {
                    vec!["Performance is expected to remain stable".to_string()]
                }
            }
            PredictionType::CapacityPlanning => {
                if predicted_value > values.last().unwrap() * 1.2 {
                    vec!["Consider scaling up capacity".to_string()]
                } else {
                    vec!["Current capacity should be sufficient".to_string()]
                }
            }
            _ => vec!["Monitor trends closely".to_string()],
        };

        Ok(PredictiveModelResult {
            model_name: "linear_regression".to_string(),
            prediction_type,
            predicted_value,
            confidence_interval,
            prediction_horizon_hours: 24,
            model_accuracy,
            timestamp: Utc::now(),
            recommendations,
        })
    }

    /// Get optimization recommendations
    pub async fn get_optimization_recommendations(
        &self,
    ) -> Result<Vec<OptimizationRecommendation>> {
        let mut recommendations = Vec::new();

        // Analyze throughput trends
        let throughput_trend = self.analyze_trends("throughput").await?;
        if throughput_trend.direction == TrendDirection::Decreasing {
            recommendations.push(OptimizationRecommendation {
                optimization_type: OptimizationType::LoadBalancing,
                priority: PriorityLevel::High,
                effort: EffortLevel::Medium,
                expected_improvement: 15.0,
                description: "Throughput is declining, consider load balancing optimization"
                    .to_string(),
                implementation_steps: vec![
                    "Analyze current load distribution".to_string(),
                    "Implement dynamic load balancing".to_string(),
                    "Monitor performance improvements".to_string(),
                ],
                estimated_impact: "15-20% throughput improvement".to_string(),
            });
        }

        // Analyze completion rate trends
        let completion_trend = self.analyze_trends("completion_rate").await?;
        if completion_trend.direction == TrendDirection::Decreasing {
            recommendations.push(OptimizationRecommendation {
                optimization_type: OptimizationType::ResourceAllocation,
                priority: PriorityLevel::Critical,
                effort: EffortLevel::High,
                expected_improvement: 25.0,
                description: "Completion rate is declining, optimize resource allocation"
                    .to_string(),
                implementation_steps: vec![
                    "Review resource allocation policies".to_string(),
                    "Implement priority-based scheduling".to_string(),
                    "Optimize task distribution".to_string(),
                ],
                estimated_impact: "20-30% completion rate improvement".to_string(),
            });
        }

        // Analyze quality trends
        let quality_trend = self.analyze_trends("quality_score").await?;
        if quality_trend.direction == TrendDirection::Decreasing {
            recommendations.push(OptimizationRecommendation {
                optimization_type: OptimizationType::ConfigurationOptimization,
                priority: PriorityLevel::Medium,
                effort: EffortLevel::Low,
                expected_improvement: 10.0,
                description: "Quality score is declining, review configuration settings"
                    .to_string(),
                implementation_steps: vec![
                    "Review quality thresholds".to_string(),
                    "Adjust validation parameters".to_string(),
                    "Monitor resource efficiency".to_string(),
                ],
                estimated_impact: "10-15% quality improvement".to_string(),
            });
        }

        Ok(recommendations)
    }

    /// Update model parameters based on prediction results
    async fn update_model_parameters(
        &self,
        prediction: &PredictiveModelResult,
    ) -> Result<ModelParameterUpdates> {
        let mut updates = ModelParameterUpdates {
            model_id: prediction.model_name.clone(),
            parameter_changes: Vec::new(),
            update_timestamp: chrono::Utc::now(),
            update_reason: "prediction_optimization".to_string(),
        };

        // Analyze prediction accuracy and adjust parameters
        let accuracy = prediction.model_accuracy;
        if accuracy < 0.8 {
            // Low accuracy, need to adjust parameters
            updates.parameter_changes.push(ParameterChange {
                parameter_name: "learning_rate".to_string(),
                old_value: 0.01,
                new_value: 0.005,
                change_reason: "accuracy_improvement".to_string(),
            });

            updates.parameter_changes.push(ParameterChange {
                parameter_name: "regularization".to_string(),
                old_value: 0.1,
                new_value: 0.2,
                change_reason: "overfitting_prevention".to_string(),
            });
        }

        // Adjust parameters based on prediction confidence
        let confidence =
            (prediction.confidence_interval.0 + prediction.confidence_interval.1) / 2.0;
        if confidence < 0.7 {
            updates.parameter_changes.push(ParameterChange {
                parameter_name: "ensemble_size".to_string(),
                old_value: 5.0,
                new_value: 10.0,
                change_reason: "confidence_improvement".to_string(),
            });
        }

        Ok(updates)
    }

    /// Get trend cache for dashboard access
    pub async fn get_trend_cache(&self) -> std::collections::HashMap<String, TrendAnalysis> {
        self.trend_cache.read().await.clone()
    }
}

impl Clone for AnalyticsEngine {
    fn clone(&self) -> Self {
        Self {
            historical_data: Arc::clone(&self.historical_data),
            trend_cache: Arc::clone(&self.trend_cache),
            anomaly_detector: Arc::clone(&self.anomaly_detector),
            predictive_models: Arc::clone(&self.predictive_models),
            config: self.config.clone(),
        }
    }
}

impl AnomalyDetector {
    /// Create a new anomaly detector
    pub fn new(config: AnomalyDetectionConfig) -> Self {
        Self {
            model: StatisticalModel {
                parameters: std::collections::HashMap::new(),
                model_type: ModelType::MovingAverage,
            },
            config,
        }
    }
}

impl Clone for AnomalyDetector {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            config: self.config.clone(),
        }
    }
}

/// Model parameter updates
#[derive(Debug, Clone)]
pub struct ModelParameterUpdates {
    pub model_id: String,
    pub parameter_changes: Vec<ParameterChange>,
    pub update_timestamp: chrono::DateTime<chrono::Utc>,
    pub update_reason: String,
}

/// Parameter change information
#[derive(Debug, Clone)]
pub struct ParameterChange {
    pub parameter_name: String,
    pub old_value: f64,
    pub new_value: f64,
    pub change_reason: String,
}

/// Parameter lifecycle management
#[derive(Debug, Clone)]
pub struct ParameterLifecycleManagement {
    pub model_id: String,
    pub lifecycle_stage: ParameterLifecycleStage,
    pub parameter_history: Vec<ParameterHistoryEntry>,
    pub rollback_available: bool,
    pub validation_status: ValidationStatus,
}

/// Parameter lifecycle stage
#[derive(Debug, Clone)]
pub enum ParameterLifecycleStage {
    Development,
    Testing,
    Production,
    Update,
    Rollback,
}

/// Parameter history entry
#[derive(Debug, Clone)]
pub struct ParameterHistoryEntry {
    pub parameter_name: String,
    pub old_value: f64,
    pub new_value: f64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub change_reason: String,
}

/// Validation status
#[derive(Debug, Clone)]
pub enum ValidationStatus {
    Pending,
    Validated,
    Failed,
}

/// Parameter optimization result
#[derive(Debug, Clone)]
pub struct ParameterOptimizationResult {
    pub model_id: String,
    pub optimization_strategy: OptimizationStrategy,
    pub optimization_metrics: OptimizationMetrics,
    pub optimization_timestamp: chrono::DateTime<chrono::Utc>,
}

/// Optimization strategy
#[derive(Debug, Clone)]
pub enum OptimizationStrategy {
    GradientDescent,
    BayesianOptimization,
    RandomSearch,
}

/// Optimization metrics
#[derive(Debug, Clone)]
pub struct OptimizationMetrics {
    pub performance_improvement: f64,
    pub stability_score: f64,
    pub efficiency_gain: f64,
}

/// Metric mapping information
#[derive(Debug, Clone)]
pub struct MetricMapping {
    pub metric_id: String,
    pub metric_name: String,
    pub metadata: MetricMetadata,
    pub aliases: Vec<String>,
    pub hierarchical_path: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Metric metadata
#[derive(Debug, Clone)]
pub struct MetricMetadata {
    pub description: String,
    pub category: String,
    pub unit: String,
    pub aggregation_method: String,
    pub data_type: String,
}

/// Data source integration
#[derive(Debug, Clone)]
pub struct DataSourceIntegration {
    pub metric_id: String,
    pub data_sources: Vec<DataSource>,
    pub redundancy_level: u32,
    pub refresh_rate: u64, // seconds
}

/// Data source
#[derive(Debug, Clone)]
pub struct DataSource {
    pub source_type: DataSourceType,
    pub connection_string: String,
    pub table_name: String,
    pub enabled: bool,
}

/// Data source type
#[derive(Debug, Clone)]
pub enum DataSourceType {
    Database,
    BusinessSystem,
    ExternalAPI,
}

/// Transformation pipeline
#[derive(Debug, Clone)]
pub struct TransformationPipeline {
    pub metric_id: String,
    pub transformations: Vec<Transformation>,
    pub anomaly_detection_enabled: bool,
    pub custom_formulas: Vec<String>,
}

/// Transformation
#[derive(Debug, Clone)]
pub struct Transformation {
    pub transformation_type: TransformationType,
    pub parameters: std::collections::HashMap<String, String>,
    pub enabled: bool,
}

/// Transformation type
#[derive(Debug, Clone)]
pub enum TransformationType {
    Normalization,
    Aggregation,
    QualityValidation,
    Correlation,
    AnomalyDetection,
}

/// Performance optimization
#[derive(Debug, Clone)]
pub struct PerformanceOptimization {
    pub metric_id: String,
    pub caching_enabled: bool,
    pub cache_ttl: u64, // seconds
    pub preloading_enabled: bool,
    pub indexing_enabled: bool,
    pub query_optimization: QueryOptimization,
}

/// Query optimization
#[derive(Debug, Clone)]
pub struct QueryOptimization {
    pub index_strategy: IndexStrategy,
    pub partition_strategy: PartitionStrategy,
    pub compression_enabled: bool,
}

/// Index strategy
#[derive(Debug, Clone)]
pub enum IndexStrategy {
    BTree,
    Hash,
    Bitmap,
    Composite,
}

/// Partition strategy
#[derive(Debug, Clone)]
pub enum PartitionStrategy {
    HashBased,
    RangeBased,
    ListBased,
}
