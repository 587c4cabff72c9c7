//! Partitioning an order feed into per-company ledgers

use std::path::Path;

use argus_core::{CompanyLedgers, OrderEvent};
use log::info;

use crate::error::LedgerResult;
use crate::feed::read_order_feed;

/// Accumulates order events into per-company ledgers
///
/// Events keep their source order within each company's ledger; the feed is
/// assumed chronological, so each ledger comes out time-sorted.
#[derive(Debug, Default)]
pub struct LedgerBuilder {
    ledgers: CompanyLedgers,
}

impl LedgerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event to its company's ledger
    pub fn push(&mut self, event: OrderEvent) {
        self.ledgers
            .entry(event.company.clone())
            .or_default()
            .push(event);
    }

    /// Append a batch of events in order
    pub fn ingest(&mut self, events: impl IntoIterator<Item = OrderEvent>) {
        for event in events {
            self.push(event);
        }
    }

    /// Finish building and hand over the immutable partition
    pub fn finish(self) -> CompanyLedgers {
        self.ledgers
    }
}

/// Load an order feed file straight into per-company ledgers
pub fn load_ledgers(path: impl AsRef<Path>) -> LedgerResult<CompanyLedgers> {
    let events = read_order_feed(path.as_ref())?;
    let record_count = events.len();

    let mut builder = LedgerBuilder::new();
    builder.ingest(events);
    let ledgers = builder.finish();

    info!(
        "loaded {} order events across {} companies from '{}'",
        record_count,
        ledgers.len(),
        path.as_ref().display()
    );

    Ok(ledgers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_core::OrderAction;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn event(secs: u32, company: &str, action: OrderAction) -> OrderEvent {
        OrderEvent::new(
            Utc.with_ymd_and_hms(2015, 2, 28, 8, 0, secs).unwrap(),
            company,
            action,
            dec!(100),
        )
    }

    #[test]
    fn partitions_by_company_preserving_order() {
        let mut builder = LedgerBuilder::new();
        builder.ingest([
            event(1, "Alpha", OrderAction::New),
            event(2, "Beta", OrderAction::New),
            event(3, "Alpha", OrderAction::Cancel),
        ]);
        let ledgers = builder.finish();

        assert_eq!(ledgers.len(), 2);
        let alpha = &ledgers["Alpha"];
        assert_eq!(alpha.len(), 2);
        assert_eq!(alpha[0].action, OrderAction::New);
        assert_eq!(alpha[1].action, OrderAction::Cancel);
        assert_eq!(ledgers["Beta"].len(), 1);
    }

    #[test]
    fn loads_ledgers_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2015-02-28 07:58:51,Joe traders,D,140").unwrap();
        writeln!(file, "2015-02-28 07:59:02,Cauldron cooking,F,280").unwrap();
        writeln!(file, "2015-02-28 07:59:10,Joe traders,F,70").unwrap();

        let ledgers = load_ledgers(file.path()).unwrap();
        assert_eq!(ledgers.len(), 2);
        assert_eq!(ledgers["Joe traders"].len(), 2);
    }
}
