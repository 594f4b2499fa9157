//! Multi-dimensional Risk Scoring System
//!
//! This module implements comprehensive risk assessment across technical, ethical,
//! operational, and business dimensions. It provides sophisticated risk scoring,
//! interaction analysis, mitigation prioritization, and risk projections.

use crate::judge::*;
use crate::error::{CouncilError, CouncilResult};
use agent_agency_contracts::working_spec::WorkingSpec;

/// Computational complexity classes
#[derive(Debug, Clone, PartialEq)]
pub enum ComputationalComplexity {
    /// O(1) - constant time
    Constant,
    /// O(log n) - logarithmic time
    Logarithmic,
    /// O(n) - linear time
    Linear,
    /// O(n log n) - linearithmic time
    Linearithmic,
    /// O(n^k) - polynomial time
    Polynomial,
    /// O(k^n) - exponential time
    Exponential,
    /// O(n!) - factorial time
    Factorial,
}

/// Multi-dimensional risk scorer
#[derive(Debug)]
pub struct RiskScorer {
    /// Technical risk weights (should sum to 1.0)
    technical_weights: TechnicalRiskWeights,
    /// Ethical risk weights
    ethical_weights: EthicalRiskWeights,
    /// Operational risk weights
    operational_weights: OperationalRiskWeights,
    /// Business risk weights
    business_weights: BusinessRiskWeights,
    /// Overall dimension weights (should sum to 1.0)
    dimension_weights: DimensionWeights,
}

/// Weights for technical risk components
#[derive(Debug, Clone)]
pub struct TechnicalRiskWeights {
    pub feasibility_weight: f32,
    pub complexity_weight: f32,
    pub resource_weight: f32,
    pub technology_weight: f32,
    pub integration_weight: f32,
    pub performance_weight: f32,
}

/// Weights for ethical risk components
#[derive(Debug, Clone)]
pub struct EthicalRiskWeights {
    pub concern_weight: f32,
    pub stakeholder_weight: f32,
    pub regulatory_weight: f32,
    pub societal_weight: f32,
    pub uncertainty_weight: f32,
}

/// Weights for operational risk components
#[derive(Debug, Clone)]
pub struct OperationalRiskWeights {
    pub deployment_weight: f32,
    pub maintenance_weight: f32,
    pub scalability_weight: f32,
    pub monitoring_weight: f32,
    pub incident_weight: f32,
}

/// Weights for business risk components
#[derive(Debug, Clone)]
pub struct BusinessRiskWeights {
    pub market_weight: f32,
    pub financial_weight: f32,
    pub stakeholder_weight: f32,
    pub competitive_weight: f32,
    pub exit_weight: f32,
}

/// Weights for overall risk dimensions
#[derive(Debug, Clone)]
pub struct DimensionWeights {
    pub technical_weight: f32,
    pub ethical_weight: f32,
    pub operational_weight: f32,
    pub business_weight: f32,
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::balanced()
    }
}

impl RiskScorer {
    /// Create a balanced risk scorer with equal dimension weights
    pub fn balanced() -> Self {
        Self {
            technical_weights: TechnicalRiskWeights {
                feasibility_weight: 0.2,
                complexity_weight: 0.2,
                resource_weight: 0.2,
                technology_weight: 0.15,
                integration_weight: 0.15,
                performance_weight: 0.1,
            },
            ethical_weights: EthicalRiskWeights {
                concern_weight: 0.3,
                stakeholder_weight: 0.25,
                regulatory_weight: 0.2,
                societal_weight: 0.15,
                uncertainty_weight: 0.1,
            },
            operational_weights: OperationalRiskWeights {
                deployment_weight: 0.25,
                maintenance_weight: 0.2,
                scalability_weight: 0.2,
                monitoring_weight: 0.15,
                incident_weight: 0.2,
            },
            business_weights: BusinessRiskWeights {
                market_weight: 0.25,
                financial_weight: 0.25,
                stakeholder_weight: 0.2,
                competitive_weight: 0.15,
                exit_weight: 0.15,
            },
            dimension_weights: DimensionWeights {
                technical_weight: 0.25,
                ethical_weight: 0.25,
                operational_weight: 0.25,
                business_weight: 0.25,
            },
        }
    }

    /// Create a risk scorer focused on ethical considerations
    pub fn ethics_focused() -> Self {
        let mut scorer = Self::balanced();
        scorer.dimension_weights.ethical_weight = 0.4;
        scorer.dimension_weights.technical_weight = 0.2;
        scorer.dimension_weights.operational_weight = 0.2;
        scorer.dimension_weights.business_weight = 0.2;
        scorer
    }

    /// Create a risk scorer focused on technical feasibility
    pub fn technical_focused() -> Self {
        let mut scorer = Self::balanced();
        scorer.dimension_weights.technical_weight = 0.4;
        scorer.dimension_weights.ethical_weight = 0.2;
        scorer.dimension_weights.operational_weight = 0.2;
        scorer.dimension_weights.business_weight = 0.2;
        scorer
    }

    /// Perform comprehensive multi-dimensional risk assessment
    pub async fn assess_risks(&self, working_spec: &WorkingSpec) -> CouncilResult<MultiDimensionalRiskAssessment> {
        // Assess each dimension
        let technical_risk = self.assess_technical_risk(working_spec).await?;
        let ethical_risk = self.assess_ethical_risk(working_spec).await?;
        let operational_risk = self.assess_operational_risk(working_spec).await?;
        let business_risk = self.assess_business_risk(working_spec).await?;

        // Calculate overall risk score
        let overall_risk_score = self.calculate_overall_risk_score(
            &technical_risk,
            &ethical_risk,
            &operational_risk,
            &business_risk,
        );

        // Identify risk interactions
        let risk_interactions = self.identify_risk_interactions(
            &technical_risk,
            &ethical_risk,
            &operational_risk,
            &business_risk,
        );

        // Generate mitigation priorities
        let mitigation_priorities = self.generate_mitigation_priorities(
            &technical_risk,
            &ethical_risk,
            &operational_risk,
            &business_risk,
            overall_risk_score,
        );

        // Project risk trends
        let risk_projections = self.project_risk_trends(
            &technical_risk,
            &ethical_risk,
            &operational_risk,
            &business_risk,
        );

        // Calculate assessment confidence
        let assessment_confidence = self.calculate_assessment_confidence(
            &technical_risk,
            &ethical_risk,
            &operational_risk,
            &business_risk,
        );

        Ok(MultiDimensionalRiskAssessment {
            overall_risk_score,
            technical_risk,
            ethical_risk,
            operational_risk,
            business_risk,
            risk_interactions,
            mitigation_priorities,
            risk_projections,
            assessment_confidence,
        })
    }

    /// Assess technical risks
    async fn assess_technical_risk(&self, working_spec: &WorkingSpec) -> CouncilResult<TechnicalRiskAssessment> {
        let desc = working_spec.description.to_lowercase();

        // Assess feasibility based on complexity indicators
        let feasibility_score = if desc.contains("complex") || desc.contains("advanced") {
            0.3 // Complex projects have lower feasibility
        } else if desc.contains("simple") || desc.contains("basic") {
            0.9 // Simple projects have high feasibility
        } else {
            0.7 // Moderate feasibility for typical projects
        };

        // Assess complexity
        let complexity_assessment = ComplexityAssessment {
            algorithmic_complexity: if desc.contains("ai") || desc.contains("ml") {
                ComputationalComplexity::Polynomial
            } else if desc.contains("optimization") || desc.contains("search") {
                ComputationalComplexity::Exponential
            } else {
                ComputationalComplexity::Linear
            },
            integration_points: desc.matches("api").count() as u32 + desc.matches("database").count() as u32,
            external_dependencies: desc.matches("external").count() as u32 + desc.matches("third-party").count() as u32,
            novelty_factor: if desc.contains("novel") || desc.contains("innovative") { 0.8 } else { 0.3 },
            team_experience_level: 0.7, // Assume moderate experience level
        };

        // Assess resource risks
        let resource_risks = vec![
            ResourceRisk {
                resource_type: "Compute".to_string(),
                availability_risk: if desc.contains("gpu") || desc.contains("high-performance") { 0.7 } else { 0.2 },
                cost_volatility: 0.4,
                alternative_sources: 3,
                description: "Computational resource requirements and availability".to_string(),
            },
            ResourceRisk {
                resource_type: "Storage".to_string(),
                availability_risk: if desc.contains("big data") || desc.contains("large dataset") { 0.6 } else { 0.1 },
                cost_volatility: 0.3,
                alternative_sources: 5,
                description: "Data storage requirements and scalability".to_string(),
            },
        ];

        // Assess technology maturity
        let technology_maturity = TechnologyMaturity {
            maturity_level: if desc.contains("cutting-edge") || desc.contains("experimental") {
                TechnologyMaturityLevel::Experimental
            } else if desc.contains("new") || desc.contains("modern") {
                TechnologyMaturityLevel::EarlyAdopter
            } else {
                TechnologyMaturityLevel::Mature
            },
            adoption_rate: 0.6,
            stability_score: if desc.contains("experimental") { 0.4 } else { 0.8 },
            vendor_support: 0.7,
            community_size: "Large".to_string(),
        };

        // Assess integration complexity
        let integration_complexity = IntegrationComplexity {
            api_integrations: desc.matches("api").count() as u32,
            data_format_complexity: if desc.contains("multiple formats") || desc.contains("legacy systems") { 0.8 } else { 0.4 },
            protocol_diversity: desc.matches("protocol").count() as u32 + 1,
            legacy_system_interfaces: desc.matches("legacy").count() as u32,
            real_time_requirements: desc.contains("real-time") || desc.contains("streaming"),
        };

        // Assess performance risks
        let performance_risks = vec![
            PerformanceRisk {
                risk_type: PerformanceRiskType::LatencyViolation,
                severity: if desc.contains("real-time") { 0.8 } else { 0.3 },
                likelihood: 0.4,
                mitigation_complexity: ComplexityLevel::Moderate,
            },
            PerformanceRisk {
                risk_type: PerformanceRiskType::ScalabilityBottleneck,
                severity: if desc.contains("high-scale") || desc.contains("million users") { 0.7 } else { 0.2 },
                likelihood: 0.5,
                mitigation_complexity: ComplexityLevel::Complex,
            },
        ];

        Ok(TechnicalRiskAssessment {
            feasibility_score,
            complexity_assessment,
            resource_risks,
            technology_maturity,
            integration_complexity,
            performance_risks,
        })
    }

    /// Assess ethical risks
    async fn assess_ethical_risk(&self, working_spec: &WorkingSpec) -> CouncilResult<EthicalRiskAssessment> {
        let desc = working_spec.description.to_lowercase();

        // Calculate ethical acceptability score
        let mut ethical_score = 1.0;

        // Privacy concerns
        if desc.contains("track") || desc.contains("monitor") || desc.contains("surveil") {
            ethical_score *= 0.1;
        }

        // Discrimination concerns
        if desc.contains("profile") || desc.contains("categorize") || desc.contains("classify") {
            if desc.contains("demographic") || desc.contains("group") {
                ethical_score *= 0.2;
            }
        }

        // Harm concerns
        if desc.contains("control") || desc.contains("restrict") || desc.contains("block") {
            ethical_score *= 0.4;
        }

        // Ethical concern categories
        let concern_categories = vec![
            EthicalConcernCategory {
                category: EthicalCategory::Privacy,
                severity_score: if desc.contains("track") || desc.contains("monitor") { 0.9 } else { 0.1 },
                affected_population_size: PopulationSize::LargeGroup,
                regulatory_implications: true,
            },
            EthicalConcernCategory {
                category: EthicalCategory::Discrimination,
                severity_score: if desc.contains("profile") || desc.contains("demographic") { 0.8 } else { 0.1 },
                affected_population_size: PopulationSize::SocietyWide,
                regulatory_implications: true,
            },
        ];

        // Stakeholder impacts
        let stakeholder_impacts = vec![
            StakeholderImpact {
                stakeholder_group: "End Users".to_string(),
                impact_type: if ethical_score > 0.7 { ImpactType::Positive } else { ImpactType::Negative },
                impact_magnitude: if ethical_score > 0.7 { 0.3 } else { -0.6 },
                duration: ImpactDuration::LongTerm,
                description: format!("Privacy and autonomy impact (ethical score: {:.1})", ethical_score),
                mitigation_strategies: vec![
                    "Implement privacy-by-design principles".to_string(),
                    "Add user consent mechanisms".to_string(),
                    "Provide transparency about data usage".to_string(),
                ],
            },
        ];

        // Regulatory risks
        let regulatory_risks = vec![
            RegulatoryRisk {
                jurisdiction: "Global".to_string(),
                regulation_type: RegulationType::DataPrivacy,
                compliance_complexity: if desc.contains("global") { 0.8 } else { 0.5 },
                penalty_severity: 0.9,
                audit_frequency: AuditFrequency::Continuous,
            },
        ];

        // Societal impacts
        let societal_impacts = vec![
            SocietalImpact {
                impact_type: SocietalImpactType::Social,
                time_horizon: TimeHorizon::LongTerm,
                magnitude: if desc.contains("ai") || desc.contains("automation") { -0.4 } else { 0.1 },
                reversibility: Reversibility::MediumTerm,
                affected_domains: vec!["Privacy".to_string(), "Autonomy".to_string(), "Trust".to_string()],
            },
        ];

        let uncertainty_factors = if desc.contains("predict") || desc.contains("forecast") {
            vec!["Prediction accuracy uncertainty".to_string(), "False positive impact".to_string()]
        } else {
            vec![]
        };

        Ok(EthicalRiskAssessment {
            ethical_score,
            concern_categories,
            stakeholder_impacts,
            regulatory_risks,
            societal_impacts,
            uncertainty_factors,
        })
    }

    /// Assess operational risks
    async fn assess_operational_risk(&self, working_spec: &WorkingSpec) -> CouncilResult<OperationalRiskAssessment> {
        let desc = working_spec.description.to_lowercase();

        // Calculate operational feasibility score
        let feasibility_score = if desc.contains("complex") || desc.contains("enterprise") {
            0.4 // Complex systems have lower operational feasibility
        } else if desc.contains("simple") || desc.contains("standalone") {
            0.9 // Simple systems have high operational feasibility
        } else {
            0.7 // Moderate feasibility for typical systems
        };

        // Deployment complexity
        let deployment_complexity = DeploymentComplexity {
            environment_count: if desc.contains("multi-region") || desc.contains("global") { 5 } else { 2 },
            infrastructure_requirements: if desc.contains("high-performance") || desc.contains("gpu") {
                InfrastructureRequirement::Specialized
            } else if desc.contains("scalable") || desc.contains("distributed") {
                InfrastructureRequirement::Extensive
            } else {
                InfrastructureRequirement::Moderate
            },
            configuration_complexity: if desc.contains("complex") { 0.8 } else { 0.4 },
            rollback_complexity: if desc.contains("zero-downtime") { 0.9 } else { 0.5 },
            zero_downtime_requirement: desc.contains("24/7") || desc.contains("mission-critical"),
        };

        // Maintenance requirements
        let maintenance_requirements = MaintenanceRequirements {
            update_frequency: if desc.contains("critical") || desc.contains("security") {
                UpdateFrequency::Weekly
            } else {
                UpdateFrequency::Monthly
            },
            monitoring_intensity: if desc.contains("mission-critical") {
                MonitoringIntensity::Critical
            } else if desc.contains("high-availability") {
                MonitoringIntensity::Intensive
            } else {
                MonitoringIntensity::Moderate
            },
            support_staffing: if desc.contains("enterprise") { 3.0 } else { 1.0 },
            emergency_response_time: std::time::Duration::from_secs(if desc.contains("critical") { 1 * 3600 } else { 4 * 3600 }),
            cost_per_month: Some(if desc.contains("enterprise") { 50000.0 } else { 5000.0 }),
        };

        // Scalability concerns
        let scalability_concerns = if desc.contains("high-scale") || desc.contains("million users") {
            vec![
                ScalabilityConcern {
                    concern_type: ScalabilityConcernType::UserLoad,
                    current_limitations: "Current architecture supports 10k concurrent users".to_string(),
                    growth_projection: GrowthProjection {
                        expected_growth_rate: 20.0, // 20% per month
                        time_to_limit: std::time::Duration::from_secs(60 * 60 * 24 * 90), // 90 days
                        growth_pattern: GrowthPattern::Exponential,
                    },
                    mitigation_complexity: ComplexityLevel::Complex,
                },
            ]
        } else {
            vec![]
        };

        // Monitoring requirements
        let monitoring_requirements = MonitoringRequirements {
            metrics_count: if desc.contains("complex") { 50 } else { 20 },
            alert_count: if desc.contains("critical") { 25 } else { 10 },
            dashboard_complexity: if desc.contains("enterprise") { DashboardComplexity::Advanced } else { DashboardComplexity::Moderate },
            log_volume: if desc.contains("high-traffic") { LogVolume::High } else { LogVolume::Moderate },
            real_time_requirements: desc.contains("real-time") || desc.contains("monitoring"),
        };

        // Incident response
        let incident_response = IncidentResponseAssessment {
            response_time_sla: std::time::Duration::from_secs(if desc.contains("critical") { 15 * 60 } else { 60 * 60 }),
            severity_classification: IncidentSeverityLevels {
                critical_incidents: true,
                high_incidents: true,
                medium_incidents: true,
                low_incidents: desc.contains("enterprise"),
            },
            escalation_procedures: if desc.contains("enterprise") { EscalationComplexity::MultiLevel } else { EscalationComplexity::Moderate },
            recovery_time_objectives: RecoveryObjectives {
                rto_critical: std::time::Duration::from_secs(4 * 3600),
                rto_high: std::time::Duration::from_secs(8 * 3600),
                rto_medium: std::time::Duration::from_secs(24 * 3600),
                rpo_critical: std::time::Duration::from_secs(15 * 60),
                rpo_high: std::time::Duration::from_secs(1 * 3600),
                rpo_medium: std::time::Duration::from_secs(4 * 3600),
            },
        };

        Ok(OperationalRiskAssessment {
            feasibility_score,
            deployment_complexity,
            maintenance_requirements,
            scalability_concerns,
            monitoring_requirements,
            incident_response,
        })
    }

    /// Assess business risks
    async fn assess_business_risk(&self, working_spec: &WorkingSpec) -> CouncilResult<BusinessRiskAssessment> {
        let desc = working_spec.description.to_lowercase();

        // Calculate business viability score
        let viability_score = if desc.contains("novel") || desc.contains("innovative") {
            0.5 // Innovative projects have higher business risk
        } else if desc.contains("standard") || desc.contains("proven") {
            0.8 // Proven approaches have lower business risk
        } else {
            0.7 // Moderate risk for typical projects
        };

        // Market impact
        let market_impact = MarketImpact {
            market_disruption: if desc.contains("disruptive") || desc.contains("transformative") { 0.8 } else { 0.3 },
            competitive_advantage: if desc.contains("unique") || desc.contains("differentiated") { 0.8 } else { 0.5 },
            market_share_potential: if desc.contains("mass-market") { 0.7 } else { 0.4 },
            industry_transformation: if desc.contains("transformative") {
                IndustryTransformation::Revolutionary
            } else if desc.contains("disruptive") {
                IndustryTransformation::Significant
            } else {
                IndustryTransformation::Incremental
            },
        };

        // Financial risks
        let financial_risks = vec![
            FinancialRisk {
                risk_type: FinancialRiskType::DevelopmentCostOverrun,
                amount_at_risk: Some(100000.0),
                probability: if desc.contains("complex") { 0.7 } else { 0.4 },
                time_horizon_months: 6,
            },
            FinancialRisk {
                risk_type: FinancialRiskType::MarketPenetrationFailure,
                amount_at_risk: Some(500000.0),
                probability: if desc.contains("novel") { 0.8 } else { 0.3 },
                time_horizon_months: 12,
            },
        ];

        // Stakeholder complexity
        let stakeholder_complexity = StakeholderComplexity {
            stakeholder_count: if desc.contains("enterprise") { 15 } else { 5 },
            stakeholder_diversity: if desc.contains("global") { 0.9 } else { 0.6 },
            communication_channels: if desc.contains("distributed") { 8 } else { 3 },
            conflict_potential: if desc.contains("controversial") { 0.8 } else { 0.3 },
            engagement_required: if desc.contains("stakeholder-intensive") {
                EngagementLevel::Critical
            } else if desc.contains("enterprise") {
                EngagementLevel::Intensive
            } else {
                EngagementLevel::Moderate
            },
        };

        // Competitive positioning
        let competitive_positioning = CompetitivePositioning {
            market_position: if desc.contains("market-leader") {
                MarketPosition::MarketLeader
            } else if desc.contains("challenger") {
                MarketPosition::Challenger
            } else {
                MarketPosition::NichePlayer
            },
            differentiation_factors: vec![
                "Technical innovation".to_string(),
                "User experience".to_string(),
                "Cost effectiveness".to_string(),
            ],
            barrier_to_entry: if desc.contains("patented") {
                BarrierStrength::Strong
            } else {
                BarrierStrength::Moderate
            },
            sustainability_score: if desc.contains("sustainable") { 0.9 } else { 0.6 },
            moat_strength: if desc.contains("network-effect") {
                MoatStrength::VeryStrong
            } else {
                MoatStrength::Moderate
            },
        };

        // Exit strategy
        let exit_strategy = ExitStrategy {
            strategy_type: if desc.contains("acquisition-target") {
                ExitStrategyType::Acquisition
            } else if desc.contains("ipo") {
                ExitStrategyType::IPO
            } else {
                ExitStrategyType::StrategicPartnership
            },
            feasibility_score: if desc.contains("attractive") { 0.9 } else { 0.6 },
            timeline_months: Some(if desc.contains("quick-exit") { 18 } else { 36 }),
            expected_return: Some(if desc.contains("high-growth") { 5000000.0 } else { 2000000.0 }),
            complexity: if desc.contains("complex") { ComplexityLevel::Complex } else { ComplexityLevel::Moderate },
        };

        Ok(BusinessRiskAssessment {
            viability_score,
            market_impact,
            financial_risks,
            stakeholder_complexity,
            competitive_positioning,
            exit_strategy,
        })
    }

    /// Calculate overall risk score from all dimensions
    fn calculate_overall_risk_score(
        &self,
        technical: &TechnicalRiskAssessment,
        ethical: &EthicalRiskAssessment,
        operational: &OperationalRiskAssessment,
        business: &BusinessRiskAssessment,
    ) -> f32 {
        // Convert dimension scores to risk scores (lower score = lower risk)
        let technical_risk = 1.0 - technical.feasibility_score;
        let ethical_risk = 1.0 - ethical.ethical_score;
        let operational_risk = 1.0 - operational.feasibility_score;
        let business_risk = 1.0 - business.viability_score;

        // Weighted combination
        (technical_risk * self.dimension_weights.technical_weight) +
        (ethical_risk * self.dimension_weights.ethical_weight) +
        (operational_risk * self.dimension_weights.operational_weight) +
        (business_risk * self.dimension_weights.business_weight)
    }

    /// Identify risk interactions between dimensions
    fn identify_risk_interactions(
        &self,
        technical: &TechnicalRiskAssessment,
        ethical: &EthicalRiskAssessment,
        operational: &OperationalRiskAssessment,
        business: &BusinessRiskAssessment,
    ) -> Vec<RiskInteraction> {
        let mut interactions = Vec::new();

        // Technical-Ethical interactions
        if technical.feasibility_score < 0.5 && ethical.ethical_score < 0.5 {
            interactions.push(RiskInteraction {
                primary_dimension: RiskDimension::Technical,
                secondary_dimension: RiskDimension::Ethical,
                interaction_type: InteractionType::Compounding,
                interaction_strength: 0.8,
                description: "Technical complexity amplifies ethical concerns through reduced oversight capability".to_string(),
                compounded_risk: RiskLevel::Critical,
            });
        }

        // Ethical-Operational interactions
        if ethical.ethical_score < 0.3 && operational.feasibility_score < 0.5 {
            interactions.push(RiskInteraction {
                primary_dimension: RiskDimension::Ethical,
                secondary_dimension: RiskDimension::Operational,
                interaction_type: InteractionType::Amplifying,
                interaction_strength: 0.7,
                description: "Ethical requirements increase operational complexity and monitoring needs".to_string(),
                compounded_risk: RiskLevel::High,
            });
        }

        // Technical-Business interactions
        if technical.feasibility_score < 0.6 && business.viability_score < 0.6 {
            interactions.push(RiskInteraction {
                primary_dimension: RiskDimension::Technical,
                secondary_dimension: RiskDimension::Business,
                interaction_type: InteractionType::Compounding,
                interaction_strength: 0.6,
                description: "Technical challenges reduce market competitiveness and financial viability".to_string(),
                compounded_risk: RiskLevel::High,
            });
        }

        interactions
    }

    /// Generate prioritized mitigation strategies
    fn generate_mitigation_priorities(
        &self,
        technical: &TechnicalRiskAssessment,
        ethical: &EthicalRiskAssessment,
        operational: &OperationalRiskAssessment,
        business: &BusinessRiskAssessment,
        overall_risk: f32,
    ) -> Vec<MitigationPriority> {
        let mut priorities = Vec::new();

        // High-priority ethical mitigations
        if ethical.ethical_score < 0.5 {
            priorities.push(MitigationPriority {
                strategy: "Implement comprehensive ethical review process".to_string(),
                target_dimension: RiskDimension::Ethical,
                priority: MitigationPriorityLevel::Critical,
                expected_reduction: 0.6,
                implementation_complexity: ComplexityLevel::Complex,
                timeline_weeks: 4,
            });
        }

        // Technical feasibility mitigations
        if technical.feasibility_score < 0.6 {
            priorities.push(MitigationPriority {
                strategy: "Conduct technical feasibility study and prototyping".to_string(),
                target_dimension: RiskDimension::Technical,
                priority: MitigationPriorityLevel::High,
                expected_reduction: 0.5,
                implementation_complexity: ComplexityLevel::Moderate,
                timeline_weeks: 6,
            });
        }

        // Operational complexity mitigations
        if operational.feasibility_score < 0.6 {
            priorities.push(MitigationPriority {
                strategy: "Develop detailed operational plan and monitoring strategy".to_string(),
                target_dimension: RiskDimension::Operational,
                priority: MitigationPriorityLevel::High,
                expected_reduction: 0.4,
                implementation_complexity: ComplexityLevel::Moderate,
                timeline_weeks: 8,
            });
        }

        // Business viability mitigations
        if business.viability_score < 0.6 {
            priorities.push(MitigationPriority {
                strategy: "Conduct market analysis and competitive positioning study".to_string(),
                target_dimension: RiskDimension::Business,
                priority: MitigationPriorityLevel::Medium,
                expected_reduction: 0.3,
                implementation_complexity: ComplexityLevel::Moderate,
                timeline_weeks: 12,
            });
        }

        // Sort by priority and expected impact
        priorities.sort_by(|a, b| {
            // Sort by priority first (Critical > High > Medium > Low)
            let priority_cmp = b.priority.cmp(&a.priority);
            if priority_cmp != std::cmp::Ordering::Equal {
                return priority_cmp;
            }
            // Then by expected reduction (higher first)
            b.expected_reduction.partial_cmp(&a.expected_reduction).unwrap_or(std::cmp::Ordering::Equal)
        });

        priorities
    }

    /// Project risk trends over time
    fn project_risk_trends(
        &self,
        technical: &TechnicalRiskAssessment,
        ethical: &EthicalRiskAssessment,
        operational: &OperationalRiskAssessment,
        business: &BusinessRiskAssessment,
    ) -> RiskProjections {
        // Short-term trend (first 3 months)
        let short_term_trend = if technical.feasibility_score < 0.5 || ethical.ethical_score < 0.5 {
            RiskTrend::Increasing // High initial risks decrease over time with mitigation
        } else {
            RiskTrend::Decreasing // Low initial risks stabilize
        };

        // Medium-term trend (3-12 months)
        let medium_term_trend = RiskTrend::Stable; // Most risks stabilize after initial implementation

        // Long-term trend (1+ years)
        let long_term_trend = if operational.feasibility_score < 0.6 {
            RiskTrend::Increasing // Operational issues may worsen over time
        } else {
            RiskTrend::Stable // Well-designed systems maintain stable risk profiles
        };

        // Key inflection points
        let mut inflection_points = Vec::new();

        // Implementation milestone (month 1)
        inflection_points.push(RiskInflectionPoint {
            timeline_months: 1,
            inflection_type: InflectionType::RiskReduction,
            description: "Initial implementation and mitigation strategies reduce technical risks".to_string(),
            impact_magnitude: -0.3,
        });

        // Operational stabilization (month 3)
        if operational.feasibility_score < 0.7 {
            inflection_points.push(RiskInflectionPoint {
                timeline_months: 3,
                inflection_type: InflectionType::RiskSpike,
                description: "Operational challenges emerge during scale-up phase".to_string(),
                impact_magnitude: 0.2,
            });
        }

        // Market feedback (month 6)
        inflection_points.push(RiskInflectionPoint {
            timeline_months: 6,
            inflection_type: InflectionType::RiskReduction,
            description: "Market validation and user feedback reduce business risks".to_string(),
            impact_magnitude: -0.2,
        });

        // Regulatory changes (month 12)
        if ethical.ethical_score < 0.8 {
            inflection_points.push(RiskInflectionPoint {
                timeline_months: 12,
                inflection_type: InflectionType::ExternalChange,
                description: "Potential regulatory changes affect compliance requirements".to_string(),
                impact_magnitude: 0.1,
            });
        }

        RiskProjections {
            short_term_trend,
            medium_term_trend,
            long_term_trend,
            inflection_points,
            stabilization_timeline_months: Some(6), // Most systems stabilize within 6 months
        }
    }

    /// Calculate assessment confidence
    fn calculate_assessment_confidence(
        &self,
        technical: &TechnicalRiskAssessment,
        ethical: &EthicalRiskAssessment,
        operational: &OperationalRiskAssessment,
        business: &BusinessRiskAssessment,
    ) -> f32 {
        // Base confidence factors
        let technical_confidence = technical.feasibility_score; // Higher feasibility = higher confidence
        let ethical_confidence = ethical.ethical_score; // Clearer ethics = higher confidence
        let operational_confidence = operational.feasibility_score; // Better operational planning = higher confidence
        let business_confidence = business.viability_score; // Clearer business case = higher confidence

        // Weighted average
        let confidence = (technical_confidence * 0.3) +
                        (ethical_confidence * 0.3) +
                        (operational_confidence * 0.2) +
                        (business_confidence * 0.2);

        // Adjust for uncertainty factors
        let uncertainty_penalty = ethical.uncertainty_factors.len() as f32 * 0.05;
        (confidence - uncertainty_penalty).max(0.1) // Minimum confidence of 10%
    }
}
