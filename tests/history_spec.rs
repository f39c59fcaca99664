use minidoc::history::{HistoryView, ScoreBand};
use minidoc::models::EvaluationRecord;
use speculate2::speculate;

fn record(score: f64) -> EvaluationRecord {
    EvaluationRecord::now(score, format!("summary for {}", score))
}

speculate! {
    describe "score bands" {
        it "classifies scores below 0.5 as low" {
            assert_eq!(ScoreBand::classify(0.0), ScoreBand::Low);
            assert_eq!(ScoreBand::classify(0.4), ScoreBand::Low);
            assert_eq!(ScoreBand::classify(0.49), ScoreBand::Low);
        }

        it "classifies scores from 0.5 up to 0.85 as medium" {
            assert_eq!(ScoreBand::classify(0.5), ScoreBand::Medium);
            assert_eq!(ScoreBand::classify(0.7), ScoreBand::Medium);
            assert_eq!(ScoreBand::classify(0.84), ScoreBand::Medium);
        }

        it "classifies scores at 0.85 and above as high" {
            assert_eq!(ScoreBand::classify(0.85), ScoreBand::High);
            assert_eq!(ScoreBand::classify(0.95), ScoreBand::High);
            assert_eq!(ScoreBand::classify(1.0), ScoreBand::High);
        }

        it "tolerates out-of-range scores" {
            assert_eq!(ScoreBand::classify(-0.3), ScoreBand::Low);
            assert_eq!(ScoreBand::classify(1.7), ScoreBand::High);
        }

        it "degrades NaN to low" {
            assert_eq!(ScoreBand::classify(f64::NAN), ScoreBand::Low);
        }

        it "names bands for display" {
            assert_eq!(ScoreBand::Low.as_str(), "low");
            assert_eq!(ScoreBand::Medium.as_str(), "medium");
            assert_eq!(ScoreBand::High.as_str(), "high");
        }
    }

    describe "selection" {
        before {
            let mut view = HistoryView::new();
        }

        it "starts with nothing expanded" {
            assert_eq!(view.expanded(), None);
        }

        it "expands a selected record" {
            view.toggle(1);
            assert_eq!(view.expanded(), Some(1));
        }

        it "switches to a newly selected record" {
            view.toggle(0);
            view.toggle(2);
            assert_eq!(view.expanded(), Some(2));
        }

        it "collapses when the expanded record is selected again" {
            view.toggle(1);
            view.toggle(1);
            assert_eq!(view.expanded(), None);
        }

        it "collapses explicitly" {
            view.toggle(0);
            view.collapse();
            assert_eq!(view.expanded(), None);
        }
    }

    describe "rows" {
        before {
            let records = vec![record(0.05), record(0.6), record(0.95)];
        }

        it "numbers runs from one in history order" {
            let rows = HistoryView::new().rows(&records);
            assert_eq!(rows.len(), 3);
            assert_eq!(rows[0].run, 1);
            assert_eq!(rows[2].run, 3);
        }

        it "bands each record by its score" {
            let rows = HistoryView::new().rows(&records);
            assert_eq!(rows[0].band, ScoreBand::Low);
            assert_eq!(rows[1].band, ScoreBand::Medium);
            assert_eq!(rows[2].band, ScoreBand::High);
        }

        it "flags only the expanded row" {
            let mut view = HistoryView::new();
            view.toggle(1);
            let rows = view.rows(&records);
            assert!(!rows[0].expanded);
            assert!(rows[1].expanded);
            assert!(!rows[2].expanded);
        }
    }
}
