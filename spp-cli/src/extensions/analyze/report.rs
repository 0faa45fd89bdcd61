//! Writes analysis results as json report and csv history.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/analyze/report_test.rs"]
mod report_test;

pub use self::actual::write_history_csv;

use super::InstanceAnalysis;
use serde::Serialize;
use std::io::{BufWriter, Write};

/// A report of the solve command.
#[derive(Clone, Debug, Serialize)]
pub struct SolveReport {
    /// Analysis per instance.
    pub instances: Vec<InstanceAnalysis>,
}

/// Writes report in json format.
pub fn write_json_report<W: Write>(report: &SolveReport, writer: BufWriter<W>) -> Result<(), String> {
    let mut writer = writer;

    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(|err| err.to_string())
        .and_then(|_| writer.write_all(b"\n").and_then(|_| writer.flush()).map_err(|err| err.to_string()))
        .map_err(|err| format!("cannot write report: '{err}'"))
}

#[cfg(feature = "csv-format")]
mod actual {
    extern crate csv;

    use super::*;
    use serde::Serialize;
    use spp_core::prelude::{Cost, Float};

    #[derive(Serialize)]
    struct HistoryRecord<'a> {
        instance: &'a str,
        iteration: usize,
        alpha: Float,
        initial: Cost,
        improved: Cost,
        best: Cost,
    }

    /// Writes the last run history of each instance in csv format.
    pub fn write_history_csv<W: Write>(analyses: &[InstanceAnalysis], writer: W) -> Result<(), String> {
        let mut writer = csv::Writer::from_writer(writer);

        analyses
            .iter()
            .filter_map(|analysis| analysis.last_run.as_ref().map(|last_run| (analysis.name.as_str(), last_run)))
            .flat_map(|(instance, last_run)| {
                (0..last_run.best.len()).map(move |idx| HistoryRecord {
                    instance,
                    iteration: idx + 1,
                    alpha: last_run.alphas[idx],
                    initial: last_run.initial[idx],
                    improved: last_run.improved[idx],
                    best: last_run.best[idx],
                })
            })
            .try_for_each(|record| writer.serialize(record))
            .and_then(|_| writer.flush().map_err(csv::Error::from))
            .map_err(|err| format!("cannot write history: '{err}'"))
    }
}

#[cfg(not(feature = "csv-format"))]
mod actual {
    use super::*;

    /// A stub method for writing history in csv format.
    pub fn write_history_csv<W: Write>(_analyses: &[InstanceAnalysis], _writer: W) -> Result<(), String> {
        Err("csv-format feature is not enabled".to_string())
    }
}
