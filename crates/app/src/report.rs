//! Runs the fixed report sequence and writes each result as it is computed.

use std::fmt::Display;
use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Value, json};

use tally_products::CodeRegistry;
use tally_reports::{
    average_buyer_age, most_expensive_product, most_popular_product, order_weights,
    product_buyers, sort_orders_by_buyer_age_desc, sort_products_by_price,
};

use crate::config::{AppConfig, OutputFormat};
use crate::sample::SampleCatalog;

enum Body {
    Inline(String),
    Lines(Vec<String>),
}

struct Section {
    label: &'static str,
    title: String,
    body: Body,
    result: Value,
}

impl Section {
    fn write_to<W: Write>(&self, format: OutputFormat, out: &mut W) -> io::Result<()> {
        match format {
            OutputFormat::Text => match &self.body {
                Body::Inline(value) => writeln!(out, "{} {}: {}\n", self.label, self.title, value),
                Body::Lines(lines) => {
                    writeln!(out, "{} {}", self.label, self.title)?;
                    for line in lines {
                        writeln!(out, "{line}")?;
                    }
                    writeln!(out)
                }
            },
            OutputFormat::Json => {
                let line = json!({
                    "report": self.label.trim_end_matches('.'),
                    "title": self.title,
                    "result": self.result,
                });
                writeln!(out, "{line}")
            }
        }
    }
}

fn bracketed<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    let parts: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("failed to serialize report result")
}

/// Runs every report over `catalog`, writing each one to `out` as soon as it is ready.
///
/// The first failing report stops the run; reports already written stay written.
///
/// # Errors
///
/// Any query error (wrapped with the report it came from), serialization failure,
/// or write failure.
pub fn run_reports<W: Write>(
    catalog: &SampleCatalog,
    registry: &CodeRegistry,
    config: &AppConfig,
    out: &mut W,
) -> Result<()> {
    let orders = &catalog.orders;
    let format = config.output;
    let mut emit = |section: Section| -> Result<()> {
        tracing::debug!(report = section.label, "writing report");
        section.write_to(format, &mut *out).context("failed to write report")
    };

    let used = registry
        .is_code_used(&config.code)
        .with_context(|| format!("report 1: checking activation code {:?}", config.code))?;
    emit(Section {
        label: "1.",
        title: format!("Is code {:?} used", config.code),
        body: Body::Inline(used.to_string()),
        result: json!(used),
    })?;

    let expensive = most_expensive_product(orders).context("report 2: most expensive product")?;
    emit(Section {
        label: "2.",
        title: "Most expensive product".to_string(),
        body: Body::Inline(expensive.to_string()),
        result: to_json(expensive)?,
    })?;

    let popular = most_popular_product(orders).context("report 3: most popular product")?;
    emit(Section {
        label: "3.",
        title: "Most popular product".to_string(),
        body: Body::Inline(popular.to_string()),
        result: to_json(popular)?,
    })?;

    let product = catalog.product(&config.age_product).with_context(|| {
        format!("report 4: no product named {:?} in the catalog", config.age_product)
    })?;
    let average = average_buyer_age(product, orders)
        .with_context(|| format!("report 4: average buyer age for {:?}", product.name()))?;
    emit(Section {
        label: "4.",
        title: format!("Average buyer age for {:?}", product.name()),
        body: Body::Inline(average.to_string()),
        result: json!(average),
    })?;

    let buyers = product_buyers(orders);
    let mut lines = Vec::with_capacity(buyers.len());
    let mut entries = Vec::with_capacity(buyers.len());
    for (product, users) in buyers.iter() {
        lines.push(format!("key: {product} value: {}", bracketed(users)));
        entries.push(json!({ "product": to_json(product)?, "buyers": to_json(users)? }));
    }
    emit(Section {
        label: "5.",
        title: "Products and the users who bought them".to_string(),
        body: Body::Lines(lines),
        result: Value::Array(entries),
    })?;

    let by_price = sort_products_by_price(&catalog.products);
    emit(Section {
        label: "6. a)",
        title: "Products sorted by price".to_string(),
        body: Body::Inline(bracketed(&by_price)),
        result: to_json(&by_price)?,
    })?;

    let by_age = sort_orders_by_buyer_age_desc(orders);
    emit(Section {
        label: "6. b)",
        title: "Orders sorted by buyer age, oldest first".to_string(),
        body: Body::Inline(bracketed(&by_age)),
        result: to_json(&by_age)?,
    })?;

    let weights = order_weights(orders);
    let mut lines = Vec::with_capacity(weights.len());
    let mut entries = Vec::with_capacity(weights.len());
    for (order, weight) in weights.iter() {
        lines.push(format!("order: {order} total weight: {weight}"));
        entries.push(json!({ "order": to_json(order)?, "total_weight": weight }));
    }
    emit(Section {
        label: "7.",
        title: "Total weight of each order".to_string(),
        body: Body::Lines(lines),
        result: Value::Array(entries),
    })?;

    Ok(())
}
