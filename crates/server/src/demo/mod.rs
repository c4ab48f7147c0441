//! Instrumented demo pipeline: competitor product selection.
//!
//! Three stages, each recorded as one step with its inputs, outputs,
//! and the reasoning behind the decision:
//!
//! 1. `keyword_generation` - derive search keywords from the reference
//!    product (mock LLM call)
//! 2. `candidate_search`   - fetch candidate products for the top
//!    keyword (mock marketplace API)
//! 3. `apply_filters`      - evaluate every candidate against price,
//!    rating, and review-count filters, then select the best match
//!
//! Pipeline failures are captured on the trace itself: the execution is
//! marked failed with the reason and its id is still returned, so the
//! failure can be inspected like any other run. Only trace-layer errors
//! propagate to the caller.

mod catalog;

use thiserror::Error;
use xray_api::{ExecutionHandle, ExecutionRecorder};
use xray_core::{ExecutionId, TerminalStatus, TraceError, Value};

use self::catalog::Product;

/// Failures internal to the demo pipeline.
#[derive(Debug, Error)]
enum DemoError {
    #[error("no qualified products found")]
    NoQualifiedProducts,
    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Run the competitor selection pipeline under a fresh execution.
///
/// Returns the execution id in both the success and the
/// pipeline-failure case; the trace records which one happened.
pub fn run_competitor_selection(recorder: &ExecutionRecorder) -> Result<ExecutionId, TraceError> {
    let reference = catalog::reference_product();

    let context = Value::object([
        ("referenceProduct", reference.to_value()),
        ("pipeline", Value::from("competitor_selection")),
    ]);
    let handle = recorder.begin(context)?;
    tracing::info!(execution_id = %handle.id(), product = %reference.title, "starting competitor selection");

    match run_stages(recorder, &handle, &reference) {
        Ok(selected) => {
            recorder.finish(&handle, TerminalStatus::Completed)?;
            tracing::info!(selected = %selected.title, "competitor selection completed");
        }
        Err(DemoError::Trace(err)) => return Err(err),
        Err(err) => {
            recorder.fail(&handle, err.to_string())?;
        }
    }

    Ok(handle.id().clone())
}

fn run_stages(
    recorder: &ExecutionRecorder,
    handle: &ExecutionHandle,
    reference: &Product,
) -> Result<Product, DemoError> {
    let keywords = generate_keywords(recorder, handle, reference)?;
    let candidates = search_candidates(recorder, handle, &keywords)?;
    apply_filters_and_select(recorder, handle, &candidates, reference)
}

/// Stage 1: derive search keywords from the reference product.
fn generate_keywords(
    recorder: &ExecutionRecorder,
    handle: &ExecutionHandle,
    product: &Product,
) -> Result<Vec<String>, DemoError> {
    let title = product.title.to_lowercase();
    let mut keywords = vec!["stainless steel water bottle insulated".to_string()];
    if title.contains("32oz") || title.contains("30oz") {
        keywords.push("vacuum insulated bottle 32oz".to_string());
    } else {
        keywords.push("insulated water bottle".to_string());
    }

    recorder.record(
        handle,
        "keyword_generation",
        Value::object([
            ("product_title", Value::from(product.title.as_str())),
            ("category", Value::from(product.category.as_str())),
        ]),
        Value::object([
            (
                "keywords",
                Value::array(keywords.iter().map(|k| Value::from(k.as_str()))),
            ),
            ("model", Value::from("gpt-4-mock")),
        ]),
        "Extracted key product attributes: material (stainless steel), capacity (32oz), feature (insulated)",
        None,
    )?;

    Ok(keywords)
}

/// Stage 2: fetch candidates for the top keyword.
fn search_candidates(
    recorder: &ExecutionRecorder,
    handle: &ExecutionHandle,
    keywords: &[String],
) -> Result<Vec<Product>, DemoError> {
    let candidates = catalog::candidate_products();

    recorder.record(
        handle,
        "candidate_search",
        Value::object([
            ("keyword", Value::from(keywords[0].as_str())),
            ("limit", Value::from(50)),
        ]),
        Value::object([
            ("total_results", Value::from(2847)),
            ("candidates_fetched", Value::from(candidates.len())),
            (
                "candidates",
                Value::array(candidates.iter().map(Product::to_value)),
            ),
        ]),
        format!(
            "Fetched top {} results by relevance; 2847 total matches found",
            candidates.len()
        ),
        None,
    )?;

    Ok(candidates)
}

/// Stage 3: evaluate every candidate, keep the qualified ones, select
/// the best match by review count then rating.
fn apply_filters_and_select(
    recorder: &ExecutionRecorder,
    handle: &ExecutionHandle,
    candidates: &[Product],
    reference: &Product,
) -> Result<Product, DemoError> {
    let min_price = reference.price * 0.5;
    let max_price = reference.price * 2.0;
    let min_rating = 3.8;
    let min_reviews = 100i64;

    let mut evaluations = Vec::with_capacity(candidates.len());
    let mut qualified = Vec::new();
    for candidate in candidates {
        let (evaluation, passed) =
            evaluate_candidate(candidate, min_price, max_price, min_rating, min_reviews);
        evaluations.push(evaluation);
        if passed {
            qualified.push(candidate.clone());
        }
    }

    let selected = qualified
        .iter()
        .max_by(|a, b| a.reviews.cmp(&b.reviews).then(a.rating.total_cmp(&b.rating)))
        .cloned()
        .ok_or(DemoError::NoQualifiedProducts)?;

    recorder.record(
        handle,
        "apply_filters",
        Value::object([
            ("candidates_count", Value::from(candidates.len())),
            ("reference_product", reference.to_value()),
        ]),
        Value::object([
            ("total_evaluated", Value::from(candidates.len())),
            ("passed", Value::from(qualified.len())),
            ("failed", Value::from(candidates.len() - qualified.len())),
            ("selected_competitor", selected.to_value()),
        ]),
        format!(
            "Applied price (${min_price:.2}-${max_price:.2}), rating ({min_rating:.1}+), and review count ({min_reviews}+) filters. \
             Narrowed candidates from {} to {}. Selected '{}' (highest review count: {}, rating: {:.1}★)",
            candidates.len(),
            qualified.len(),
            selected.title,
            selected.reviews,
            selected.rating
        ),
        Some(Value::object([
            (
                "filters_applied",
                Value::object([
                    (
                        "price_range",
                        Value::object([
                            ("min", Value::from(min_price)),
                            ("max", Value::from(max_price)),
                            ("rule", Value::from("0.5x - 2x of reference price")),
                        ]),
                    ),
                    (
                        "min_rating",
                        Value::object([
                            ("value", Value::from(min_rating)),
                            ("rule", Value::from("Must be at least 3.8 stars")),
                        ]),
                    ),
                    (
                        "min_reviews",
                        Value::object([
                            ("value", Value::from(min_reviews)),
                            ("rule", Value::from("Must have at least 100 reviews")),
                        ]),
                    ),
                ]),
            ),
            ("evaluations", Value::Array(evaluations)),
        ])),
    )?;

    Ok(selected)
}

/// Evaluate one candidate against every filter, keeping a per-filter
/// pass/fail verdict with a human-readable detail.
fn evaluate_candidate(
    candidate: &Product,
    min_price: f64,
    max_price: f64,
    min_rating: f64,
    min_reviews: i64,
) -> (Value, bool) {
    let passes_price = candidate.price >= min_price && candidate.price <= max_price;
    let price_detail = if passes_price {
        format!("${:.2} is within ${min_price:.2}-${max_price:.2}", candidate.price)
    } else if candidate.price < min_price {
        format!("${:.2} is below minimum ${min_price:.2}", candidate.price)
    } else {
        format!("${:.2} is above maximum ${max_price:.2}", candidate.price)
    };

    let passes_rating = candidate.rating >= min_rating;
    let rating_detail = if passes_rating {
        format!("{:.1} >= {min_rating:.1}", candidate.rating)
    } else {
        format!("{:.1} < {min_rating:.1} threshold", candidate.rating)
    };

    let passes_reviews = candidate.reviews >= min_reviews;
    let reviews_detail = if passes_reviews {
        format!("{} >= {min_reviews}", candidate.reviews)
    } else {
        format!("{} < {min_reviews} minimum", candidate.reviews)
    };

    let qualified = passes_price && passes_rating && passes_reviews;

    let evaluation = Value::object([
        ("asin", Value::from(candidate.asin.as_str())),
        ("title", Value::from(candidate.title.as_str())),
        (
            "metrics",
            Value::object([
                ("price", Value::from(candidate.price)),
                ("rating", Value::from(candidate.rating)),
                ("reviews", Value::from(candidate.reviews)),
            ]),
        ),
        (
            "filter_results",
            Value::object([
                (
                    "price_range",
                    Value::object([
                        ("passed", Value::from(passes_price)),
                        ("detail", Value::from(price_detail)),
                    ]),
                ),
                (
                    "min_rating",
                    Value::object([
                        ("passed", Value::from(passes_rating)),
                        ("detail", Value::from(rating_detail)),
                    ]),
                ),
                (
                    "min_reviews",
                    Value::object([
                        ("passed", Value::from(passes_reviews)),
                        ("detail", Value::from(reviews_detail)),
                    ]),
                ),
            ]),
        ),
        ("qualified", Value::from(qualified)),
    ]);

    (evaluation, qualified)
}
