use crate::error::EmptyDataset;
use crate::loader::Dataset;
use crate::reports::types::TimeReport;
use crate::reports::utility::mode_min;

/// Computes the modal start month, weekday, and hour over the dataset.
pub fn time_report(data: &Dataset) -> Result<TimeReport, EmptyDataset> {
    let records = data.records();

    let (month, _) = mode_min(records.iter().map(|r| r.month())).ok_or(EmptyDataset)?;
    let (weekday, _) = mode_min(records.iter().map(|r| r.weekday())).ok_or(EmptyDataset)?;
    let (hour, _) = mode_min(records.iter().map(|r| r.hour())).ok_or(EmptyDataset)?;

    Ok(TimeReport {
        month,
        weekday,
        hour,
    })
}
