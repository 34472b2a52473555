use serde::{Deserialize, Serialize};

// =========================================================
// Chart figure types (Plotly `{data, layout}` shape)
// =========================================================

/// A complete chart figure as consumed by Plotly.js.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            layout: FigureLayout {
                title: Title::new(title),
                xaxis: None,
                yaxis: None,
                legend: None,
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    pub fn pie_traces(&self) -> impl Iterator<Item = &PieTrace> {
        self.data.iter().filter_map(|trace| match trace {
            Trace::Pie(pie) => Some(pie),
            _ => None,
        })
    }

    pub fn scatter_traces(&self) -> impl Iterator<Item = &ScatterTrace> {
        self.data.iter().filter_map(|trace| match trace {
            Trace::Scatter(scatter) => Some(scatter),
            _ => None,
        })
    }

    /// Total number of markers across all scatter traces.
    pub fn point_count(&self) -> usize {
        self.scatter_traces().map(|trace| trace.x.len()).sum()
    }
}

/// One series of a figure, tagged with the Plotly trace type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Scatter(ScatterTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
    /// Keep slices in the order given instead of by size.
    pub sort: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    pub name: String,
    pub mode: String,
    pub legendgroup: String,
    pub x: Vec<f64>,
    pub y: Vec<i64>,
    /// Launch site of each point, shown on hover.
    pub text: Vec<String>,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureLayout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: Title,
}
