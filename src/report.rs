//! Presentation boundary: a language-neutral [`Report`] snapshot plus
//! renderers that attach display strings only at output time.

use std::io::{self, Write};

use serde::Serialize;

use crate::config::{Locale, RunConfig};
use crate::data::filter::GenderFilter;
use crate::data::model::Record;
use crate::stats::NameStatistics;

// ---------------------------------------------------------------------------
// Report – every statistic of one run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderLeader {
    pub gender: String,
    /// Records carrying this gender.
    pub matching: usize,
    pub record: Option<Record>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total_records: usize,
    pub genders_seen: Vec<String>,
    pub most_popular: Option<Record>,
    pub most_popular_by_gender: Vec<GenderLeader>,
    pub unused: usize,
    pub median: Option<f64>,
    pub average: f64,
    pub rare_threshold: u64,
    pub rare: usize,
    pub common_threshold: u64,
    pub common: usize,
}

impl Report {
    pub fn build(stats: &NameStatistics, config: &RunConfig) -> Self {
        let most_popular = stats
            .most_popular()
            .map_err(|e| log::warn!("{e}"))
            .ok()
            .cloned();
        let median = stats.median_count().map_err(|e| log::warn!("{e}")).ok();

        Self {
            total_records: stats.len(),
            genders_seen: stats
                .dataset()
                .distinct_genders()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            most_popular,
            most_popular_by_gender: config
                .genders
                .iter()
                .map(|g| GenderLeader {
                    gender: g.clone(),
                    matching: GenderFilter::new(g).count(stats.dataset()),
                    record: stats.most_popular_by_gender(g).cloned(),
                })
                .collect(),
            unused: stats.count_unused(),
            median,
            average: stats.average_count(),
            rare_threshold: config.rare_threshold,
            rare: stats.count_below(config.rare_threshold),
            common_threshold: config.common_threshold,
            common: stats.count_above(config.common_threshold),
        }
    }
}

// ---------------------------------------------------------------------------
// Locale tables
// ---------------------------------------------------------------------------

struct Labels {
    most_popular: &'static str,
    female: &'static str,
    male: &'static str,
    /// Used for any other gender; the gender is appended in parentheses.
    other_gender: &'static str,
    name: &'static str,
    sex: &'static str,
    chosen: &'static str,
    unused: &'static str,
    median: &'static str,
    average: &'static str,
    rare: &'static str,
    common: &'static str,
}

static EN: Labels = Labels {
    most_popular: "Most popular name",
    female: "Most popular female name",
    male: "Most popular male name",
    other_gender: "Most popular name",
    name: "Name",
    sex: "Sex",
    chosen: "Choose",
    unused: "Number of unused names",
    median: "Median number",
    average: "Average number",
    rare: "Number of rare names",
    common: "Number of common names",
};

static RU: Labels = Labels {
    most_popular: "Самое популярное имя",
    female: "Самое популярное женское имя",
    male: "Самое популярное мужское имя",
    other_gender: "Самое популярное имя",
    name: "Имя",
    sex: "Пол",
    chosen: "Выбрано",
    unused: "Количество неиспользуемых имён",
    median: "Медианное количество",
    average: "Среднее количество",
    rare: "Количество редких имён",
    common: "Количество распространённых имён",
};

fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::En => &EN,
        Locale::Ru => &RU,
    }
}

impl Labels {
    fn gender_heading(&self, gender: &str) -> String {
        match gender {
            "female" => self.female.to_string(),
            "male" => self.male.to_string(),
            other => format!("{} ({other})", self.other_gender),
        }
    }

    fn record(&self, record: &Record) -> String {
        format!(
            "{}: {}, {}: {}, {}: {}",
            self.name, record.name, self.sex, record.gender, self.chosen, record.count
        )
    }
}

// ---------------------------------------------------------------------------
// Renderers
// ---------------------------------------------------------------------------

/// Write the report as text lines in fixed order. Missing records print
/// as [`Record::not_found`] and a missing median prints as `0`.
pub fn render_text<W: Write>(report: &Report, locale: Locale, out: &mut W) -> io::Result<()> {
    let l = labels(locale);
    let sentinel = Record::not_found();

    let top = report.most_popular.as_ref().unwrap_or(&sentinel);
    writeln!(out, "{}: {}", l.most_popular, l.record(top))?;

    for leader in &report.most_popular_by_gender {
        let record = leader.record.as_ref().unwrap_or(&sentinel);
        writeln!(out, "{}: {}", l.gender_heading(&leader.gender), l.record(record))?;
    }

    writeln!(out, "{}: {}", l.unused, report.unused)?;
    writeln!(out, "{}: {}", l.median, format_number(report.median.unwrap_or(0.0)))?;
    writeln!(out, "{}: {}", l.average, format_number(report.average))?;
    writeln!(out, "{}: {}", l.rare, report.rare)?;
    writeln!(out, "{}: {}", l.common, report.common)?;
    Ok(())
}

pub fn render_json<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

/// Format a real number with at most six significant digits and no
/// trailing zeros: `10`, `11.6667`, `1.23457e+06`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return if value == 0.0 { "0".to_string() } else { value.to_string() };
    }

    let sci = format!("{value:.5e}");
    let Some((mantissa, exp)) = sci
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
    else {
        return value.to_string();
    };

    if !(-4..6).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    } else {
        let decimals = (5 - exp) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
