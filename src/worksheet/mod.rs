//! Worksheet assembly: settings → layout plan → questions → pages.

pub mod render;

pub use render::{render, render_layout, render_text, OutputFormat};

use crate::dataset::KanjiDataset;
use crate::generator::{generate, GenerateRequest, RandomSource};
use crate::layout::LayoutPlan;
use crate::model::{AppError, Question};
use crate::pagination::{paginate, Page, PageFooter, PageHeader};
use crate::settings::Settings;
use chrono::NaiveDate;
use serde::Serialize;

/// Date as printed in the page header.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y年%-m月%-d日").to_string()
}

/// One page with its header and footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetPage {
    pub header: PageHeader,
    pub footer: PageFooter,
    #[serde(flatten)]
    pub page: Page<Question>,
}

/// A fully assembled worksheet, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Worksheet {
    pub settings: Settings,
    pub layout: LayoutPlan,
    pub date: NaiveDate,
    pub pages: Vec<WorksheetPage>,
}

impl Worksheet {
    /// Validates `settings`, generates enough questions for every page and
    /// splits them into pages.
    ///
    /// # Errors
    ///
    /// Returns error if the settings are invalid or the grade has nothing
    /// to ask in this mode.
    pub fn build<R: RandomSource + ?Sized>(
        settings: &Settings,
        dataset: &KanjiDataset,
        rng: &mut R,
        date: NaiveDate,
    ) -> Result<Self, AppError> {
        settings.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected worksheet settings");
        })?;

        let layout = LayoutPlan::for_settings(settings);
        let request = GenerateRequest::from_settings(settings);
        let questions = generate(dataset, &request, rng)?;

        let printed_date = format_date(date);
        let pages = paginate(questions, layout.rows_per_page as usize);
        let total_pages = pages.len();

        let pages = pages
            .into_iter()
            .map(|page| WorksheetPage {
                header: PageHeader::for_page(page.index, &settings.title, settings.mode, &printed_date),
                footer: PageFooter::for_page(page.index, total_pages, settings.grade, settings.mode),
                page,
            })
            .collect();

        tracing::info!(
            mode = %settings.mode,
            grade = %settings.grade,
            pages = total_pages,
            rows_per_page = layout.rows_per_page,
            "Built worksheet"
        );

        Ok(Self {
            settings: settings.clone(),
            layout,
            date,
            pages,
        })
    }

    pub fn question_count(&self) -> usize {
        self.pages.iter().map(|p| p.page.len()).sum()
    }

    /// Every question in print order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.pages.iter().flat_map(|p| p.page.items.iter())
    }
}
