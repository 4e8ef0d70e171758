//! CSS grid tracks, areas and placement
//!
//! [CSS Grid Layout Level 2](https://www.w3.org/TR/css-grid-2/)

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use super::length::Length;
use crate::render::{Num, impl_render, write_joined};

/// [§ 7.2.3.2 Repeat-to-fill](https://www.w3.org/TR/css-grid-2/#auto-repeat)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RepeatCount {
    /// A fixed number of repetitions.
    Count(u32),
    /// "the number of repetitions is the largest possible positive integer
    /// that does not cause the grid to overflow the content box"
    AutoFill,
    /// "Behaves the same as auto-fill, except that after grid item placement
    /// any empty repeated tracks are collapsed."
    AutoFit,
}

impl fmt::Display for RepeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::AutoFill => f.write_str("auto-fill"),
            Self::AutoFit => f.write_str("auto-fit"),
        }
    }
}

/// [§ 7.2 Explicit Track Sizing](https://www.w3.org/TR/css-grid-2/#track-sizing)
///
/// `<track-size>`. `Fr(n)` and `Length(Length::fr(n))` are the same track and
/// render the same text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GridTrack {
    /// [§ 7.2.4 Flexible Lengths](https://www.w3.org/TR/css-grid-2/#fr-unit)
    Fr(f64),
    /// "Defines a size range greater than or equal to min and less than or
    /// equal to max."
    Minmax(Length, Length),
    /// `auto`
    Auto,
    /// A fixed `<length-percentage>`.
    Length(Length),
    /// "Represents the formula max(minimum, min(limit, max-content))"
    FitContent(Length),
}

impl fmt::Display for GridTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fr(value) => write!(f, "{}fr", Num(*value)),
            Self::Minmax(min, max) => write!(f, "minmax({min}, {max})"),
            Self::Auto => f.write_str("auto"),
            Self::Length(length) => write!(f, "{length}"),
            Self::FitContent(limit) => write!(f, "fit-content({limit})"),
        }
    }
}

impl From<Length> for GridTrack {
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

/// [§ 7.2 'grid-template-columns', 'grid-template-rows'](https://www.w3.org/TR/css-grid-2/#track-sizing)
///
/// Used for both axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GridTemplate {
    /// "Indicates that no explicit grid tracks are created by this property"
    None,
    /// A track list, space-separated.
    Tracks(Vec<GridTrack>),
    /// `repeat(<count>, <tracks>)`
    Repeat(RepeatCount, Vec<GridTrack>),
    /// Verbatim template text; blank text renders `none`.
    Custom(String),
}

impl GridTemplate {
    /// A track list of plain lengths.
    #[must_use]
    pub fn lengths(lengths: impl IntoIterator<Item = Length>) -> Self {
        Self::Tracks(lengths.into_iter().map(GridTrack::Length).collect())
    }

    /// `repeat(<count>, <tracks>)`
    #[must_use]
    pub const fn repeat(count: RepeatCount, tracks: Vec<GridTrack>) -> Self {
        Self::Repeat(count, tracks)
    }
}

impl fmt::Display for GridTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Tracks(tracks) if tracks.is_empty() => f.write_str("none"),
            Self::Custom(text) if text.trim().is_empty() => f.write_str("none"),
            Self::Tracks(tracks) => write_joined(f, tracks, " "),
            Self::Repeat(count, tracks) => {
                write!(f, "repeat({count}, ")?;
                write_joined(f, tracks, " ")?;
                f.write_str(")")
            }
            Self::Custom(text) => f.write_str(text),
        }
    }
}

/// [§ 7.3 'grid-template-areas'](https://www.w3.org/TR/css-grid-2/#grid-template-areas-property)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GridTemplateAreas {
    /// `none`
    None,
    /// Rows of cell names; `None` cells are "null cell tokens" (`.`).
    Areas(Vec<Vec<Option<String>>>),
    /// Verbatim area text; blank text renders `none`.
    Custom(String),
}

impl fmt::Display for GridTemplateAreas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Areas(rows) if rows.is_empty() => f.write_str("none"),
            Self::Custom(text) if text.trim().is_empty() => f.write_str("none"),
            Self::Areas(rows) => {
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    let cells: Vec<&str> = row.iter().map(|cell| cell.as_deref().unwrap_or(".")).collect();
                    write!(f, "'{}'", cells.join(" "))?;
                }
                Ok(())
            }
            Self::Custom(text) => f.write_str(text),
        }
    }
}

/// [§ 7.6 Implicit Track Sizing](https://www.w3.org/TR/css-grid-2/#auto-tracks)
///
/// `grid-auto-columns` and `grid-auto-rows`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GridAuto {
    /// `auto`
    Auto,
    /// A fixed size.
    Length(Length),
    /// `minmax(<min>, <max>)`
    Minmax(Length, Length),
    /// `fit-content(<limit>)`
    FitContent(Length),
}

impl fmt::Display for GridAuto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Length(length) => write!(f, "{length}"),
            Self::Minmax(min, max) => write!(f, "minmax({min}, {max})"),
            Self::FitContent(limit) => write!(f, "fit-content({limit})"),
        }
    }
}

/// [§ 7.7 'grid-auto-flow'](https://www.w3.org/TR/css-grid-2/#grid-auto-flow-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum GridAutoFlow {
    /// "The auto-placement algorithm places items by filling each row in
    /// turn"
    #[strum(serialize = "row")]
    Row,
    /// "The auto-placement algorithm places items by filling each column in
    /// turn"
    #[strum(serialize = "column")]
    Column,
    /// `row dense`
    #[strum(serialize = "row dense")]
    RowDense,
    /// `column dense`
    #[strum(serialize = "column dense")]
    ColumnDense,
}

/// [CSS Box Alignment § 8.4 'gap'](https://www.w3.org/TR/css-align-3/#gap-shorthand)
///
/// "If <'column-gap'> is omitted, it's set to the same value as
/// <'row-gap'>." Equal gaps render as one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridGap {
    /// Gap between rows.
    pub row: Length,
    /// Gap between columns.
    pub column: Length,
}

impl GridGap {
    /// The same gap on both axes.
    #[must_use]
    pub fn uniform(gap: Length) -> Self {
        Self {
            row: gap.clone(),
            column: gap,
        }
    }

    /// Separate row and column gaps.
    #[must_use]
    pub const fn new(row: Length, column: Length) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for GridGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.row == self.column {
            write!(f, "{}", self.row)
        } else {
            write!(f, "{} {}", self.row, self.column)
        }
    }
}

/// [§ 8.3 Line-based Placement](https://www.w3.org/TR/css-grid-2/#line-placement)
///
/// `<grid-line>` for any of `grid-{row,column}-{start,end}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum GridLine {
    /// "The property contributes nothing to the grid item's placement"
    Auto,
    /// "Contributes a grid span to the grid item's placement"
    Span(u32),
    /// "Contributes the Nth grid line to the grid item's placement."
    Line(i32),
    /// A named line or area; a blank name renders `auto`.
    Name(String),
}

impl fmt::Display for GridLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Name(name) if name.trim().is_empty() => f.write_str("auto"),
            Self::Span(count) => write!(f, "span {count}"),
            Self::Line(line) => write!(f, "{line}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// [§ 8.4 'grid-row', 'grid-column'](https://www.w3.org/TR/css-grid-2/#placement-shorthands)
///
/// `<grid-line> [ / <grid-line> ]?`, always written with both lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GridPlacement {
    /// Start line.
    pub start: GridLine,
    /// End line.
    pub end: GridLine,
}

impl GridPlacement {
    /// A start/end pair.
    #[must_use]
    pub const fn new(start: GridLine, end: GridLine) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for GridPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.start, self.end)
    }
}

/// [§ 8.4 'grid-area'](https://www.w3.org/TR/css-grid-2/#propdef-grid-area)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum GridArea {
    /// `auto`
    Auto,
    /// `<row-start> / <column-start> / <row-end> / <column-end>`
    Lines {
        /// First row line.
        row_start: i32,
        /// First column line.
        column_start: i32,
        /// Last row line.
        row_end: i32,
        /// Last column line.
        column_end: i32,
    },
    /// A named area from `grid-template-areas`; a blank name renders `auto`.
    Named(String),
}

impl fmt::Display for GridArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Named(name) if name.trim().is_empty() => f.write_str("auto"),
            Self::Lines {
                row_start,
                column_start,
                row_end,
                column_end,
            } => write!(f, "{row_start} / {column_start} / {row_end} / {column_end}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

impl_render!(
    GridTemplate,
    RepeatCount,
    GridTrack,
    GridTemplateAreas,
    GridAuto,
    GridAutoFlow,
    GridGap,
    GridLine,
    GridPlacement,
    GridArea,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_areas_quote_each_row() {
        let areas = GridTemplateAreas::Areas(vec![
            vec![Some("header".to_owned()), Some("header".to_owned())],
            vec![Some("sidebar".to_owned()), None],
        ]);
        assert_eq!(areas.to_string(), "'header header' 'sidebar .'");
    }

    #[test]
    fn test_gap_collapses_when_equal() {
        assert_eq!(GridGap::uniform(Length::px(8.0)).to_string(), "8.0px");
        assert_eq!(
            GridGap::new(Length::px(8.0), Length::em(1.0)).to_string(),
            "8.0px 1.0em"
        );
    }
}
