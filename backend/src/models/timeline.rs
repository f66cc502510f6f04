use serde::Serialize;

use super::time::ChartDate;

/// Overall active range of a band, resolved for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandSpan {
    /// Recorded life-span begin; absent when the catalog has none.
    pub begin: Option<ChartDate>,
    pub end: ChartDate,
}

/// One tenure of one person in the band.
///
/// Field names match the task records Gantt renderers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipInterval {
    #[serde(rename = "Task")]
    pub task: String,
    #[serde(rename = "Start")]
    pub start: ChartDate,
    #[serde(rename = "Finish")]
    pub finish: ChartDate,
    #[serde(rename = "Resource")]
    pub resource: String,
}

impl MembershipInterval {
    pub fn new(member: impl Into<String>, start: ChartDate, finish: ChartDate) -> Self {
        let member = member.into();
        Self {
            task: member.clone(),
            start,
            finish,
            resource: member,
        }
    }
}

/// Display color assigned to one member row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberColor {
    pub resource: String,
    pub color: String,
}

/// Everything a Gantt renderer needs for one band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GanttChart {
    pub band_id: Option<String>,
    pub title: String,
    pub span: BandSpan,
    pub tasks: Vec<MembershipInterval>,
    pub colors: Vec<MemberColor>,
}

impl GanttChart {
    /// Number of distinct member rows.
    pub fn member_count(&self) -> usize {
        self.colors.len()
    }
}
