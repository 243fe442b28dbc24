//! Tests for the billing module

use super::*;
use crate::error::Error;
use crate::resources::{DatabaseCluster, Droplet, DropletSize, ResourceInventory, Snapshot, Volume};
use chrono::{DateTime, TimeZone, Utc};

/// Evaluation instant 100 hours into July 2026
fn period() -> BillingPeriod {
    BillingPeriod::at(Utc.with_ymd_and_hms(2026, 7, 5, 4, 0, 0).unwrap())
}

/// Evaluation instant 684 hours into July 2026, past the 672-hour cap
fn late_period() -> BillingPeriod {
    BillingPeriod::at(Utc.with_ymd_and_hms(2026, 7, 29, 12, 0, 0).unwrap())
}

fn droplet(created_at: DateTime<Utc>, price_hourly: f64) -> Droplet {
    Droplet {
        id: 1,
        name: "web-1".to_string(),
        created_at,
        features: Vec::new(),
        size: DropletSize {
            slug: "s-1vcpu-1gb".to_string(),
            price_hourly,
            price_monthly: price_hourly * MAX_BILLABLE_HOURS,
        },
    }
}

fn backed_up_droplet(created_at: DateTime<Utc>, price_hourly: f64) -> Droplet {
    let mut droplet = droplet(created_at, price_hourly);
    droplet.features = vec!["backups".to_string(), "ipv6".to_string()];
    droplet
}

fn database(size: &str, num_nodes: u32, created_at: DateTime<Utc>) -> DatabaseCluster {
    DatabaseCluster {
        id: "9cc10173-e9ea-4176-9dbc-a4cee4c4ff30".to_string(),
        name: "backend".to_string(),
        engine: "pg".to_string(),
        size: size.to_string(),
        num_nodes,
        created_at,
    }
}

fn volume(size_gigabytes: u64, created_at: DateTime<Utc>) -> Volume {
    Volume {
        id: "506f78a4-e098-11e5-ad9f-000f53306ae1".to_string(),
        name: "data".to_string(),
        size_gigabytes,
        created_at,
    }
}

fn snapshot(size_gigabytes: f64, created_at: DateTime<Utc>) -> Snapshot {
    Snapshot {
        id: "6372321".to_string(),
        name: "web-1-snap".to_string(),
        size_gigabytes,
        created_at,
    }
}

fn assert_dollars(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Droplets
// ============================================================================

#[test]
fn test_droplet_created_at_month_start() {
    // Created on the 1st at 00:00, evaluated at hour 100 of the month
    let month_start = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();
    let estimate = droplet_costs(&[droplet(month_start, 0.05)], &period());

    assert_dollars(estimate.current, 5.00);
    assert_dollars(estimate.projected, 33.60);
}

#[test]
fn test_droplet_created_mid_month_projects_remaining_hours() {
    // Created July 5th 00:00, four hours before the evaluation instant;
    // 648 hours remain until August, below the cap
    let created = Utc.with_ymd_and_hms(2026, 7, 5, 0, 0, 0).unwrap();
    let estimate = droplet_costs(&[droplet(created, 0.05)], &period());

    assert_dollars(estimate.current, round2(4.0 * 0.05));
    assert_dollars(estimate.projected, round2(648.0 * 0.05));
}

#[test]
fn test_droplet_predating_month_caps_at_monthly_hours() {
    // 684 hours into the month; billing stops at 672
    let created = Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();
    let estimate = droplet_costs(&[droplet(created, 0.05)], &late_period());

    assert_dollars(estimate.current, 33.60);
    assert_dollars(estimate.projected, 33.60);
}

#[test]
fn test_droplet_hours_stay_within_monthly_cap() {
    let created = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

    for period in [period(), late_period()] {
        let estimate = droplet_costs(&[droplet(created, 0.05)], &period);
        assert!(estimate.current >= 0.0);
        assert!(estimate.current <= round2(MAX_BILLABLE_HOURS * 0.05) + 1e-9);
    }
}

#[test]
fn test_estimators_return_zero_for_empty_input() {
    let period = period();

    assert_eq!(droplet_costs(&[], &period), CostEstimate::ZERO);
    assert_eq!(
        database_costs(&[], &DatabaseRates::default(), &period).unwrap(),
        CostEstimate::ZERO
    );
    assert_eq!(volume_costs(&[], &period), CostEstimate::ZERO);
    assert_eq!(snapshot_costs(&[], &period), CostEstimate::ZERO);
    assert_eq!(backup_costs(&[], &period), CostEstimate::ZERO);
}

// ============================================================================
// Databases
// ============================================================================

#[test]
fn test_database_created_last_month_uses_table_rate() {
    let created = Utc.with_ymd_and_hms(2026, 6, 15, 9, 30, 0).unwrap();
    let estimate = database_costs(
        &[database("db-s-1vcpu-1gb", 1, created)],
        &DatabaseRates::default(),
        &period(),
    )
    .unwrap();

    assert_dollars(estimate.current, round2(100.0 * 0.022));
    assert_dollars(estimate.projected, 14.78);
}

#[test]
fn test_database_unknown_rate_is_an_error() {
    let created = Utc.with_ymd_and_hms(2026, 6, 15, 9, 30, 0).unwrap();
    let result = database_costs(
        &[database("db-s-1vcpu-1gb", 2, created)],
        &DatabaseRates::default(),
        &period(),
    );

    match result {
        Err(Error::UnknownDatabaseRate { size, num_nodes }) => {
            assert_eq!(size, "db-s-1vcpu-1gb");
            assert_eq!(num_nodes, 2);
        }
        other => panic!("expected UnknownDatabaseRate, got {other:?}"),
    }
}

#[test]
fn test_unknown_rate_aborts_whole_summary() {
    let month_start = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();
    let inventory = ResourceInventory {
        droplets: vec![droplet(month_start, 0.05)],
        databases: vec![database("db-z-unknown", 1, month_start)],
        ..ResourceInventory::default()
    };

    let result = compute_cost_summary(&inventory, &DatabaseRates::default(), &period());
    assert!(result.is_err());
}

// ============================================================================
// Volumes & Snapshots
// ============================================================================

#[test]
fn test_volume_created_ten_hours_ago() {
    // 100 GB at $0.10/GB-month spread over 672 hours
    let created = Utc.with_ymd_and_hms(2026, 7, 4, 18, 0, 0).unwrap();
    let estimate = volume_costs(&[volume(100, created)], &period());

    let hourly = 100.0 * VOLUME_COST_PER_GB_MONTH / MAX_BILLABLE_HOURS;
    assert_dollars(estimate.current, round2(10.0 * hourly));
    assert_dollars(estimate.current, 0.15);
    // 654 hours remain until August
    assert_dollars(estimate.projected, round2(654.0 * hourly));
}

#[test]
fn test_snapshot_rate_is_half_the_volume_rate() {
    let created = Utc.with_ymd_and_hms(2026, 5, 2, 0, 0, 0).unwrap();
    let period = period();

    let volume_estimate = volume_costs(&[volume(100, created)], &period);
    let snapshot_estimate = snapshot_costs(&[snapshot(100.0, created)], &period);

    assert_dollars(volume_estimate.projected, 10.00);
    assert_dollars(snapshot_estimate.projected, 5.00);
    assert_dollars(snapshot_estimate.current, round2(100.0 * 100.0 * 0.05 / 672.0));
}

#[test]
fn test_snapshot_sizes_can_be_fractional() {
    let created = Utc.with_ymd_and_hms(2026, 5, 2, 0, 0, 0).unwrap();
    let estimate = snapshot_costs(&[snapshot(2.34, created)], &period());

    let hourly = 2.34 * SNAPSHOT_COST_PER_GB_MONTH / MAX_BILLABLE_HOURS;
    assert_dollars(estimate.projected, round2(MAX_BILLABLE_HOURS * hourly));
}

// ============================================================================
// Backups
// ============================================================================

#[test]
fn test_droplet_without_backup_feature_contributes_nothing() {
    let month_start = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();
    let estimate = backup_costs(&[droplet(month_start, 0.05)], &period());

    assert_eq!(estimate, CostEstimate::ZERO);
}

#[test]
fn test_backup_costs_one_week_into_month() {
    // One backup unit = 5% of a full compute month = 0.05 * 672 * 0.05
    let created = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    let estimate = backup_costs(&[backed_up_droplet(created, 0.05)], &period());

    let unit = 0.05 * MAX_BILLABLE_HOURS * BACKUP_PRICE_RATIO;
    assert_dollars(estimate.current, round2(unit));
    assert_dollars(estimate.projected, round2(4.0 * unit));
}

#[test]
fn test_backup_count_caps_at_four() {
    let created = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let estimate = backup_costs(&[backed_up_droplet(created, 0.05)], &late_period());

    let unit = 0.05 * MAX_BILLABLE_HOURS * BACKUP_PRICE_RATIO;
    assert_dollars(estimate.current, round2(4.0 * unit));
}

#[test]
fn test_backup_projection_is_full_month_even_for_new_droplets() {
    let created = Utc.with_ymd_and_hms(2026, 7, 5, 0, 0, 0).unwrap();
    let estimate = backup_costs(&[backed_up_droplet(created, 0.05)], &period());

    let unit = 0.05 * MAX_BILLABLE_HOURS * BACKUP_PRICE_RATIO;
    assert_dollars(estimate.current, round2(unit));
    assert_dollars(estimate.projected, round2(4.0 * unit));
}

// ============================================================================
// Rounding & Aggregation
// ============================================================================

#[test]
fn test_each_resource_rounds_before_summation() {
    // Two droplets that each bill under half a cent for their single hour;
    // per-resource rounding drops both, so the subtotal stays at zero
    let created = Utc.with_ymd_and_hms(2026, 7, 5, 3, 0, 0).unwrap();
    let droplets = vec![droplet(created, 0.004), droplet(created, 0.004)];

    let estimate = droplet_costs(&droplets, &period());
    assert_dollars(estimate.current, 0.0);
}

#[test]
fn test_estimators_are_idempotent() {
    let created = Utc.with_ymd_and_hms(2026, 6, 20, 7, 0, 0).unwrap();
    let period = period();
    let droplets = vec![backed_up_droplet(created, 0.03)];

    assert_eq!(
        droplet_costs(&droplets, &period),
        droplet_costs(&droplets, &period)
    );
    assert_eq!(
        backup_costs(&droplets, &period),
        backup_costs(&droplets, &period)
    );
}

#[test]
fn test_summary_totals_every_category() {
    let month_start = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();
    let inventory = ResourceInventory {
        droplets: vec![backed_up_droplet(month_start, 0.05)],
        databases: vec![database(
            "db-s-1vcpu-1gb",
            1,
            Utc.with_ymd_and_hms(2026, 6, 15, 9, 30, 0).unwrap(),
        )],
        volumes: vec![volume(
            100,
            Utc.with_ymd_and_hms(2026, 7, 4, 18, 0, 0).unwrap(),
        )],
        snapshots: vec![snapshot(
            40.0,
            Utc.with_ymd_and_hms(2026, 6, 20, 0, 0, 0).unwrap(),
        )],
    };

    let summary = compute_cost_summary(&inventory, &DatabaseRates::default(), &period()).unwrap();

    assert_dollars(summary.droplets.current, 5.00);
    assert_dollars(summary.databases.current, 2.20);
    assert_dollars(summary.volumes.current, 0.15);
    assert_dollars(summary.snapshots.current, 0.30);
    assert_dollars(summary.backups.current, 1.68);

    let total = summary.total();
    assert_dollars(total.current, 9.33);
    assert_dollars(total.projected, 33.60 + 14.78 + 9.73 + 2.00 + 6.72);
}

#[test]
fn test_cost_estimates_add_and_sum() {
    let a = CostEstimate::new(1.25, 3.50);
    let b = CostEstimate::new(0.75, 1.50);

    let sum = a + b;
    assert_dollars(sum.current, 2.0);
    assert_dollars(sum.projected, 5.0);

    let folded: CostEstimate = [a, b, CostEstimate::ZERO].into_iter().sum();
    assert_eq!(folded, sum);
}

#[test]
fn test_round2() {
    assert_dollars(round2(0.004), 0.0);
    assert_dollars(round2(0.005), 0.01);
    assert_dollars(round2(33.599_999), 33.60);
}
