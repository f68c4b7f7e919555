use crate::dashboard::domain::{Control, ControlSeverity};
use serde::Serialize;

/// Weighted compliance score for one framework.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkScore {
    pub framework: String,
    /// 0.0 - 100.0
    pub score: f64,
    pub control_count: usize,
    pub passing_count: usize,
}

/// Non-passing controls bucketed by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpenRisks {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl OpenRisks {
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// FrameworkScorer derives the compliance page's framework cards from a
/// control list.
///
/// A control contributes its severity weight to its framework's total, and to
/// the passing weight when its status is `pass`. A framework with no weight
/// scores 100.
pub struct FrameworkScorer;

impl FrameworkScorer {
    /// Scores every framework, in order of first appearance in `controls`.
    pub fn score_frameworks(controls: &[Control]) -> Vec<FrameworkScore> {
        let mut frameworks: Vec<(&str, Vec<&Control>)> = Vec::new();

        for control in controls {
            match frameworks
                .iter()
                .position(|(name, _)| *name == control.framework)
            {
                Some(index) => frameworks[index].1.push(control),
                None => frameworks.push((control.framework.as_str(), vec![control])),
            }
        }

        frameworks
            .into_iter()
            .map(|(framework, members)| FrameworkScore {
                framework: framework.to_string(),
                score: Self::weighted_score(members.iter().copied()),
                control_count: members.len(),
                passing_count: members.iter().filter(|c| c.status.is_passing()).count(),
            })
            .collect()
    }

    /// Weighted score across all controls regardless of framework.
    pub fn overall_score(controls: &[Control]) -> f64 {
        Self::weighted_score(controls.iter())
    }

    pub fn open_risks(controls: &[Control]) -> OpenRisks {
        controls
            .iter()
            .filter(|c| !c.status.is_passing())
            .fold(OpenRisks::default(), |mut risks, control| {
                match control.severity {
                    ControlSeverity::Critical => risks.critical += 1,
                    ControlSeverity::High => risks.high += 1,
                    ControlSeverity::Medium => risks.medium += 1,
                    ControlSeverity::Low => risks.low += 1,
                }
                risks
            })
    }

    fn weighted_score<'a>(controls: impl Iterator<Item = &'a Control>) -> f64 {
        let (total, passing) = controls.fold((0u32, 0u32), |(total, passing), control| {
            let weight = control.severity.weight();
            if control.status.is_passing() {
                (total + weight, passing + weight)
            } else {
                (total + weight, passing)
            }
        });

        if total == 0 {
            return 100.0;
        }
        f64::from(passing) / f64::from(total) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::domain::ControlStatus;

    fn control(
        id: &str,
        framework: &str,
        severity: ControlSeverity,
        status: ControlStatus,
    ) -> Control {
        Control {
            id: id.to_string(),
            name: format!("Control {}", id),
            framework: framework.to_string(),
            severity,
            status,
            evidence_count: 1,
            description: None,
        }
    }

    fn sample_controls() -> Vec<Control> {
        vec![
            control("AC-2", "NIST 800-53", ControlSeverity::Critical, ControlStatus::Pass),
            control("AC-3", "NIST 800-53", ControlSeverity::High, ControlStatus::Fail),
            control("CC-6", "SOC 2", ControlSeverity::High, ControlStatus::AtRisk),
            control("CC-7", "SOC 2", ControlSeverity::Medium, ControlStatus::Pass),
        ]
    }

    #[test]
    fn test_score_frameworks_weighted() {
        let scores = FrameworkScorer::score_frameworks(&sample_controls());
        assert_eq!(scores.len(), 2);

        // NIST: passing 5 of 8
        assert_eq!(scores[0].framework, "NIST 800-53");
        assert!((scores[0].score - 62.5).abs() < 1e-9);
        assert_eq!(scores[0].control_count, 2);
        assert_eq!(scores[0].passing_count, 1);

        // SOC 2: passing 2 of 5
        assert_eq!(scores[1].framework, "SOC 2");
        assert!((scores[1].score - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_frameworks_preserves_first_appearance_order() {
        let controls = vec![
            control("CC-7", "SOC 2", ControlSeverity::Low, ControlStatus::Pass),
            control("A.5", "ISO 27001", ControlSeverity::Low, ControlStatus::Pass),
            control("CC-6", "SOC 2", ControlSeverity::Low, ControlStatus::Pass),
        ];
        let names: Vec<String> = FrameworkScorer::score_frameworks(&controls)
            .into_iter()
            .map(|s| s.framework)
            .collect();
        assert_eq!(names, vec!["SOC 2", "ISO 27001"]);
    }

    #[test]
    fn test_score_frameworks_empty() {
        assert!(FrameworkScorer::score_frameworks(&[]).is_empty());
    }

    #[test]
    fn test_overall_score() {
        // passing 7 of 13
        let score = FrameworkScorer::overall_score(&sample_controls());
        assert!((score - 7.0 / 13.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_overall_score_without_controls_is_full() {
        assert_eq!(FrameworkScorer::overall_score(&[]), 100.0);
    }

    #[test]
    fn test_open_risks_counts_non_passing() {
        let risks = FrameworkScorer::open_risks(&sample_controls());
        assert_eq!(
            risks,
            OpenRisks {
                critical: 0,
                high: 2,
                medium: 0,
                low: 0
            }
        );
        assert_eq!(risks.total(), 2);
    }
}
