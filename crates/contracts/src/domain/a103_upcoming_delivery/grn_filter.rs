use super::aggregate::Delivery;
use crate::shared::search::contains_ci;
use chrono::{DateTime, NaiveDate};

/// Client-side filters of the admin GRN table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrnFilter {
    pub search: String,
    pub site: String,
    /// `YYYY-MM-DD`, inclusive
    pub date_from: String,
    /// `YYYY-MM-DD`, inclusive
    pub date_to: String,
}

fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn created_day(delivery: &Delivery) -> Option<NaiveDate> {
    let raw = delivery.created_at.as_deref()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
        .or_else(|| parse_day(raw.get(..10).unwrap_or(raw)))
}

impl GrnFilter {
    /// Resets site and dates; the search box is independent of the filter panel.
    pub fn clear_panel(&mut self) {
        self.site.clear();
        self.date_from.clear();
        self.date_to.clear();
    }

    fn matches_search(&self, d: &Delivery) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let created_by = d.created_by.as_deref().unwrap_or_default();
        [
            d.transfer_number.as_str(),
            d.st_id.as_str(),
            d.from.as_str(),
            d.to.as_str(),
            created_by,
        ]
        .iter()
        .any(|field| !field.is_empty() && contains_ci(field, &self.search))
    }

    fn matches_site(&self, d: &Delivery) -> bool {
        self.site.is_empty() || contains_ci(&d.from, &self.site) || contains_ci(&d.to, &self.site)
    }

    /// Date bounds apply to the creation day; rows without a readable
    /// creation date drop out as soon as either bound is set.
    fn matches_dates(&self, d: &Delivery) -> bool {
        let from = parse_day(&self.date_from);
        let to = parse_day(&self.date_to);
        if from.is_none() && to.is_none() {
            return true;
        }
        let Some(day) = created_day(d) else {
            return false;
        };
        from.map_or(true, |f| day >= f) && to.map_or(true, |t| day <= t)
    }

    pub fn matches(&self, d: &Delivery) -> bool {
        d.status.is_transferred() && self.matches_search(d) && self.matches_site(d) && self.matches_dates(d)
    }

    pub fn apply(&self, deliveries: &[Delivery]) -> Vec<Delivery> {
        deliveries.iter().filter(|d| self.matches(d)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a103_upcoming_delivery::aggregate::DeliveryStatus;

    fn delivery(id: &str, from: &str, to: &str, created: &str) -> Delivery {
        Delivery {
            id: id.into(),
            st_id: format!("ST-{}", id),
            transfer_number: format!("TR-{}", id),
            from: from.into(),
            to: to.into(),
            status: DeliveryStatus::Transferred,
            created_at: Some(created.into()),
            created_by: Some("Asha".into()),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Delivery> {
        vec![
            delivery("1", "Main Store", "Site A", "2024-03-01T09:00:00.000Z"),
            delivery("2", "Vendor", "Site B", "2024-03-05T23:59:00.000Z"),
            delivery("3", "Site A", "Site C", "2024-03-10T00:00:00.000Z"),
            Delivery {
                status: DeliveryStatus::Pending,
                ..delivery("4", "Main Store", "Site A", "2024-03-02T10:00:00.000Z")
            },
        ]
    }

    fn ids(rows: Vec<Delivery>) -> Vec<String> {
        rows.into_iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_default_filter_keeps_transferred_only() {
        let filter = GrnFilter::default();
        assert_eq!(ids(filter.apply(&sample())), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_search_over_ids_and_sites() {
        let filter = GrnFilter {
            search: "tr-2".into(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&sample())), vec!["2"]);

        let filter = GrnFilter {
            search: "asha".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&sample()).len(), 3);
    }

    #[test]
    fn test_site_matches_either_end() {
        let filter = GrnFilter {
            site: "site a".into(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&sample())), vec!["1", "3"]);
    }

    #[test]
    fn test_date_range_is_inclusive_by_day() {
        let filter = GrnFilter {
            date_from: "2024-03-05".into(),
            date_to: "2024-03-10".into(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&sample())), vec!["2", "3"]);

        let filter = GrnFilter {
            date_to: "2024-03-01".into(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&sample())), vec!["1"]);
    }

    #[test]
    fn test_missing_created_at_excluded_by_date_filter() {
        let mut rows = sample();
        rows[0].created_at = None;
        let filter = GrnFilter {
            date_from: "2024-01-01".into(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&rows)), vec!["2", "3"]);
        assert_eq!(GrnFilter::default().apply(&rows).len(), 3);
    }

    #[test]
    fn test_clear_panel_keeps_search() {
        let mut filter = GrnFilter {
            search: "x".into(),
            site: "Site A".into(),
            date_from: "2024-01-01".into(),
            date_to: "2024-02-01".into(),
        };
        filter.clear_panel();
        assert_eq!(filter.search, "x");
        assert!(filter.site.is_empty() && filter.date_from.is_empty() && filter.date_to.is_empty());
    }
}
