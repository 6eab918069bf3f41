//! Canvas aggregation.
//!
//! Collapses a selected portfolio into the single roadmap document: money
//! totals, portfolio-level ROI, deduplicated benefit/risk lists, the
//! synthesized timeline, and per-initiative breakdown tables kept verbatim
//! for traceability.

use chrono::NaiveDate;

use super::schema::{
    BenefitDetail, BenefitSummary, Canvas, Capabilities, ContextualBenefit, CostDetail,
    CostSummary, Footer, Header, Impacts, Inputs, Objectives, PortfolioRoi, TimelineItem,
    BREAKDOWN_FALLBACK, CANVAS_TITLE, CANVAS_VERSION, CREDIT_LINE, EXTERNAL_SUPPORT,
    HARD_BENEFITS_CAP, PERSONNEL, RISKS_CAP, SKILLS_NEEDED, SOFT_BENEFITS_CAP, TECHNOLOGY,
};
use crate::core::{dedup_first_seen, format_usd, OrgMetadata, UseCase};
use crate::portfolio::Portfolio;
use crate::timeline::build_timeline;

/// Build the aggregated canvas for a selected portfolio.
///
/// `use_cases` is the full candidate pool (only its size is reported);
/// `today` stamps the header and anchors the timeline. Always a full
/// rebuild; inputs are never mutated.
pub fn build_canvas(
    use_cases: &[UseCase],
    portfolio: &Portfolio,
    org: &OrgMetadata,
    today: NaiveDate,
) -> Canvas {
    let selected = &portfolio.selected_use_cases;

    let detailed_timeline = build_timeline(selected, today);
    let timeline: Vec<TimelineItem> = detailed_timeline
        .iter()
        .map(|tl| TimelineItem {
            ai_initiative: tl.initiative.clone(),
            start_date: tl.overall_start,
            end_date: tl.overall_end,
            duration_months: tl.total_duration_months,
            milestone: format!("{}-month delivery", tl.total_duration_months),
            roi: tl.roi.clone(),
            expected_benefit: tl.expected_benefit.clone(),
            effort: tl.effort,
            phases: tl.phases.clone(),
        })
        .collect();

    // Money totals across the selected set.
    let total_initial_cost: f64 = selected.iter().map(|uc| uc.use_case.costs.initial_cost).sum();
    let total_near_term_cost: f64 =
        selected.iter().map(|uc| uc.use_case.costs.near_term_annual_cost).sum();
    let total_long_term_cost: f64 =
        selected.iter().map(|uc| uc.use_case.costs.long_term_annual_cost).sum();
    let total_near_term_benefit: f64 =
        selected.iter().map(|uc| uc.use_case.expected_benefits.near_term_annual_benefit).sum();
    let total_long_term_benefit: f64 =
        selected.iter().map(|uc| uc.use_case.expected_benefits.long_term_annual_benefit).sum();

    // Portfolio-level ROI mirrors the per-use-case formulas on the totals.
    let near_term_outlay = total_initial_cost + total_near_term_cost;
    let portfolio_near_term_roi = if near_term_outlay > 0.0 {
        (total_near_term_benefit - near_term_outlay) / near_term_outlay * 100.0
    } else {
        0.0
    };
    let total_cost_3y = total_initial_cost + total_near_term_cost + 2.0 * total_long_term_cost;
    let total_benefit_3y = total_near_term_benefit + 2.0 * total_long_term_benefit;
    let portfolio_long_term_roi = if total_cost_3y > 0.0 {
        (total_benefit_3y - total_cost_3y) / total_cost_3y * 100.0
    } else {
        0.0
    };

    // Benefit and risk lists, first-seen order.
    let all_kpis = selected.iter().flat_map(|uc| uc.use_case.kpis.iter().cloned());
    let hard_benefits = dedup_first_seen(all_kpis, HARD_BENEFITS_CAP);

    let mut all_soft_benefits: Vec<String> = Vec::new();
    let mut soft_benefits_with_context: Vec<ContextualBenefit> = Vec::new();
    for uc in selected {
        for sb in &uc.use_case.expected_benefits.soft_benefits {
            all_soft_benefits.push(sb.benefit_text().to_string());
            if let Some(context) = sb.context() {
                soft_benefits_with_context.push(ContextualBenefit {
                    benefit: sb.benefit_text().to_string(),
                    context: context.to_string(),
                });
            }
        }
    }
    let soft_benefits = dedup_first_seen(all_soft_benefits, SOFT_BENEFITS_CAP);
    soft_benefits_with_context.truncate(SOFT_BENEFITS_CAP);

    let all_risks = selected.iter().flat_map(|uc| uc.use_case.risk.risks_list.iter().cloned());
    let risks = dedup_first_seen(all_risks, RISKS_CAP);

    // Per-initiative rows, preserved verbatim for traceability.
    let cost_details: Vec<CostDetail> = selected
        .iter()
        .map(|uc| {
            let costs = &uc.use_case.costs;
            CostDetail {
                category: uc.use_case.title.clone(),
                initial: format_usd(costs.initial_cost),
                annual: format_usd(costs.near_term_annual_cost),
                breakdown: costs
                    .initial_cost_breakdown
                    .clone()
                    .unwrap_or_else(|| BREAKDOWN_FALLBACK.to_string()),
                annual_breakdown: costs
                    .near_term_annual_cost_breakdown
                    .clone()
                    .unwrap_or_else(|| BREAKDOWN_FALLBACK.to_string()),
            }
        })
        .collect();

    let benefit_details: Vec<BenefitDetail> = selected
        .iter()
        .map(|uc| {
            let benefits = &uc.use_case.expected_benefits;
            BenefitDetail {
                initiative: uc.use_case.title.clone(),
                year1_benefit: format_usd(benefits.near_term_annual_benefit),
                year1_breakdown: benefits
                    .near_term_benefit_breakdown
                    .clone()
                    .unwrap_or_else(|| BREAKDOWN_FALLBACK.to_string()),
                ongoing_benefit: format_usd(benefits.long_term_annual_benefit),
                soft_benefits: benefits
                    .soft_benefits
                    .iter()
                    .map(|sb| sb.benefit_text().to_string())
                    .collect(),
            }
        })
        .collect();

    tracing::debug!(
        initiatives = selected.len(),
        candidates = use_cases.len(),
        "canvas aggregated"
    );

    Canvas {
        header: Header {
            canvas_title: CANVAS_TITLE.to_string(),
            organization: org.name.clone(),
            team: org.team.clone(),
            name: org.name.clone(),
            designed_by: org.designed_by.clone(),
            designed_for: org.designed_for.clone(),
            date: today,
            version: CANVAS_VERSION.to_string(),
        },
        objectives: Objectives {
            primary_goal: org.primary_goal.clone(),
            strategic_focus: org.strategic_focus.clone(),
        },
        inputs: Inputs {
            resources: vec![format!("{} initial investment", format_usd(total_initial_cost))],
            personnel: PERSONNEL.iter().map(|p| (*p).to_string()).collect(),
            external_support: EXTERNAL_SUPPORT.iter().map(|e| (*e).to_string()).collect(),
        },
        impacts: Impacts { hard_benefits, soft_benefits: soft_benefits.clone(), soft_benefits_with_context },
        timeline,
        detailed_timeline,
        risks,
        capabilities: Capabilities {
            skills_needed: SKILLS_NEEDED.iter().map(|s| (*s).to_string()).collect(),
            technology: TECHNOLOGY.iter().map(|t| (*t).to_string()).collect(),
        },
        costs: CostSummary {
            near_term: format_usd(total_initial_cost + total_near_term_cost),
            near_term_breakdown: vec![
                format!("Initial: {}", format_usd(total_initial_cost)),
                format!("Annual: {}", format_usd(total_near_term_cost)),
            ],
            cost_details,
            long_term: format!("{} annually", format_usd(total_long_term_cost)),
            annual_maintenance: format_usd(total_long_term_cost),
        },
        benefits: BenefitSummary {
            near_term: format!("{} annually", format_usd(total_near_term_benefit)),
            near_term_breakdown: vec![
                format!("Year 1: {}", format_usd(total_near_term_benefit)),
                format!("Years 2-3: {}/year", format_usd(total_long_term_benefit)),
            ],
            benefit_details,
            long_term: format!("{} annually", format_usd(total_long_term_benefit)),
            soft_benefits,
        },
        portfolio_roi: PortfolioRoi {
            near_term_roi_percent: format!("{portfolio_near_term_roi:.1}%"),
            long_term_roi_percent: format!("{portfolio_long_term_roi:.1}%"),
            portfolio_note: format!(
                "Portfolio of {} AI initiatives selected from {} candidates",
                selected.len(),
                use_cases.len()
            ),
        },
        footer: Footer { credit_line: CREDIT_LINE.to_string() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SoftBenefit;
    use crate::portfolio::select_portfolio;
    use crate::roi::compute_roi;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn candidate(id: &str, effort: u8, scale: f64) -> UseCase {
        UseCase::new(id, format!("Initiative {id}"))
            .with_effort(effort)
            .with_benefits(450_000.0 * scale, 750_000.0 * scale)
            .with_costs(150_000.0 * scale, 40_000.0 * scale, 35_000.0 * scale)
            .with_risk(0.3, 0.4)
            .with_kpis(vec!["Cycle time".to_string(), format!("KPI {id}")])
            .with_risk_item("Adoption risk")
            .with_risk_item(format!("Risk {id}"))
            .with_soft_benefit(SoftBenefit::Plain("Improved operations".to_string()))
    }

    fn canvas_for(use_cases: &[UseCase], budget: u32) -> Canvas {
        let evaluated = compute_roi(use_cases).unwrap();
        let portfolio = select_portfolio(&evaluated, budget);
        build_canvas(use_cases, &portfolio, &OrgMetadata::default(), day(2026, 1, 1))
    }

    #[test]
    fn test_totals_and_portfolio_roi() {
        let use_cases = vec![candidate("A", 3, 1.0), candidate("B", 4, 1.0)];
        let canvas = canvas_for(&use_cases, 100);

        // Two identical-scale initiatives: totals double, ratios hold.
        assert_eq!(canvas.costs.near_term, "$380,000");
        assert_eq!(canvas.costs.long_term, "$70,000 annually");
        assert_eq!(canvas.costs.annual_maintenance, "$70,000");
        assert_eq!(canvas.benefits.near_term, "$900,000 annually");
        assert_eq!(canvas.benefits.long_term, "$1,500,000 annually");

        // Same outlay/benefit ratio as a single initiative: 136.8% / 650.0%.
        assert_eq!(canvas.portfolio_roi.near_term_roi_percent, "136.8%");
        assert_eq!(canvas.portfolio_roi.long_term_roi_percent, "650.0%");
        assert_eq!(
            canvas.portfolio_roi.portfolio_note,
            "Portfolio of 2 AI initiatives selected from 2 candidates"
        );
    }

    #[test]
    fn test_empty_portfolio_has_zero_roi_not_error() {
        let canvas = canvas_for(&[], 10);
        assert_eq!(canvas.portfolio_roi.near_term_roi_percent, "0.0%");
        assert_eq!(canvas.portfolio_roi.long_term_roi_percent, "0.0%");
        assert!(canvas.timeline.is_empty());
        assert!(canvas.detailed_timeline.is_empty());
    }

    #[test]
    fn test_hard_benefits_dedup_and_cap() {
        // 12 initiatives sharing one KPI plus one unique each: 13 unique,
        // capped at 10; the shared KPI appears once, first.
        let use_cases: Vec<UseCase> =
            (0..12).map(|i| candidate(&format!("UC{i:03}"), 2, 1.0)).collect();
        let canvas = canvas_for(&use_cases, 1000);

        assert_eq!(canvas.impacts.hard_benefits.len(), 10);
        assert_eq!(canvas.impacts.hard_benefits[0], "Cycle time");
        assert_eq!(
            canvas.impacts.hard_benefits.iter().filter(|b| b.as_str() == "Cycle time").count(),
            1
        );
    }

    #[test]
    fn test_risks_dedup_and_cap() {
        let use_cases: Vec<UseCase> =
            (0..20).map(|i| candidate(&format!("UC{i:03}"), 2, 1.0)).collect();
        let canvas = canvas_for(&use_cases, 1000);

        assert_eq!(canvas.risks.len(), 15);
        assert_eq!(canvas.risks[0], "Adoption risk");
        assert_eq!(canvas.risks.iter().filter(|r| r.as_str() == "Adoption risk").count(), 1);
    }

    #[test]
    fn test_soft_benefits_split_plain_and_contextual() {
        let uc = candidate("A", 3, 1.0).with_soft_benefit(SoftBenefit::Contextual {
            benefit: "Faster onboarding".to_string(),
            context: "Support team".to_string(),
        });
        let canvas = canvas_for(&[uc], 100);

        assert!(canvas.impacts.soft_benefits.contains(&"Improved operations".to_string()));
        assert!(canvas.impacts.soft_benefits.contains(&"Faster onboarding".to_string()));
        assert_eq!(canvas.impacts.soft_benefits_with_context.len(), 1);
        assert_eq!(canvas.impacts.soft_benefits_with_context[0].benefit, "Faster onboarding");
        assert_eq!(canvas.impacts.soft_benefits_with_context[0].context, "Support team");
    }

    #[test]
    fn test_breakdown_rows_fall_back_to_placeholder() {
        let use_cases = vec![candidate("A", 3, 1.0)];
        let canvas = canvas_for(&use_cases, 100);

        assert_eq!(canvas.costs.cost_details.len(), 1);
        let row = &canvas.costs.cost_details[0];
        assert_eq!(row.category, "Initiative A");
        assert_eq!(row.initial, "$150,000");
        assert_eq!(row.breakdown, "See use case details");

        let benefit_row = &canvas.benefits.benefit_details[0];
        assert_eq!(benefit_row.year1_benefit, "$450,000");
        assert_eq!(benefit_row.year1_breakdown, "See use case details");
    }

    #[test]
    fn test_breakdown_rows_keep_supplied_narratives() {
        let mut uc = candidate("A", 3, 1.0);
        uc.costs.initial_cost_breakdown = Some("Licenses $100k, integration $50k".to_string());
        let canvas = canvas_for(&[uc], 100);

        assert_eq!(canvas.costs.cost_details[0].breakdown, "Licenses $100k, integration $50k");
    }

    #[test]
    fn test_timeline_items_mirror_detailed_timeline() {
        let use_cases = vec![candidate("A", 3, 1.0), candidate("B", 8, 0.5)];
        let canvas = canvas_for(&use_cases, 100);

        assert_eq!(canvas.timeline.len(), canvas.detailed_timeline.len());
        for (item, detail) in canvas.timeline.iter().zip(&canvas.detailed_timeline) {
            assert_eq!(item.ai_initiative, detail.initiative);
            assert_eq!(item.start_date, detail.overall_start);
            assert_eq!(item.end_date, detail.overall_end);
            assert_eq!(item.duration_months, detail.total_duration_months);
            assert_eq!(item.milestone, format!("{}-month delivery", detail.total_duration_months));
        }
    }

    #[test]
    fn test_header_and_fixed_copy() {
        let org = OrgMetadata {
            name: "Acme".to_string(),
            team: "Ops".to_string(),
            designed_by: "Jordan".to_string(),
            designed_for: "Board".to_string(),
            primary_goal: "Automate intake".to_string(),
            strategic_focus: "Efficiency".to_string(),
        };
        let use_cases = vec![candidate("A", 3, 1.0)];
        let evaluated = compute_roi(&use_cases).unwrap();
        let portfolio = select_portfolio(&evaluated, 100);
        let canvas = build_canvas(&use_cases, &portfolio, &org, day(2026, 8, 7));

        assert_eq!(canvas.header.canvas_title, "AI ROI & Roadmap Canvas");
        assert_eq!(canvas.header.organization, "Acme");
        assert_eq!(canvas.header.name, "Acme");
        assert_eq!(canvas.header.date, day(2026, 8, 7));
        assert_eq!(canvas.header.version, "v1.0");
        assert_eq!(canvas.objectives.primary_goal, "Automate intake");
        assert_eq!(canvas.inputs.resources, vec!["$150,000 initial investment".to_string()]);
        assert_eq!(canvas.capabilities.skills_needed.len(), 4);
        assert_eq!(canvas.capabilities.technology.len(), 3);
    }

    #[test]
    fn test_canvas_serializes_with_wire_keys() {
        let use_cases = vec![candidate("A", 3, 1.0)];
        let canvas = canvas_for(&use_cases, 100);
        let value = serde_json::to_value(&canvas).unwrap();

        assert!(value.get("Header").is_some());
        assert_eq!(value["Header"]["CanvasTitle"], "AI ROI & Roadmap Canvas");
        assert!(value["Impacts"].get("HardBenefits").is_some());
        assert!(value.get("PortfolioROI").is_some());
        assert!(value["PortfolioROI"].get("NearTermROIPercent").is_some());
        assert_eq!(value["Timeline"][0]["AIInitiative"], "Initiative A");
        assert!(value["Timeline"][0].get("ROI").is_some());
        assert!(value.get("DetailedTimeline").is_some());
        assert!(value["Footer"].get("CreditLine").is_some());
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let use_cases = vec![candidate("A", 3, 1.0), candidate("B", 6, 2.0)];
        let first = canvas_for(&use_cases, 10);
        let second = canvas_for(&use_cases, 10);
        assert_eq!(first, second);
    }
}
