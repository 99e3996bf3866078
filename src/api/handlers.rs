// ==========================================
// Asin Batcher - action handlers
// ==========================================
// The three engine actions: preview, process, export_duplicates.
// Every handler is a single stateless invocation; all failures are
// converted to the uniform failure payload at the dispatch boundary.
// ==========================================

use crate::api::dto::{
    DuplicatesResponse, EngineRequest, FailureResponse, PreviewResponse, ProcessResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::domain::store_from_selection;
use crate::engine::{deduplicate, reorder, split_in_batches, ExtractionResult};
use crate::importer::extract_asins_any;
use crate::output::{
    cleanup_work_dir, ensure_folder, export_duplicates_csv, sanitize_filename, write_batches,
    zip_outputs,
};
use chrono::Local;
use std::path::{Path, PathBuf};

// ==========================================
// Shared helpers
// ==========================================

/// Validate `input_path` and run extraction + deduplication.
fn extract_validated(request: &EngineRequest) -> ApiResult<ExtractionResult> {
    let input_path = request.input_path();
    if input_path.is_empty() {
        return Err(ApiError::MissingInputPath);
    }
    let path = Path::new(input_path);
    if !path.exists() {
        return Err(ApiError::InputFileNotFound);
    }
    let tokens = extract_asins_any(path)?;
    Ok(deduplicate(tokens))
}

/// Base label for output names, resolved from either labeling scheme.
///
/// The new-style scheme (`name_prefix_1`/`name_prefix_2`/`store_name`)
/// activates when any of its fields is present; `store_name` falls
/// back to `store`. The legacy scheme resolves `store` against the
/// catalog and requires `file_label`.
fn resolve_base_label(request: &EngineRequest) -> ApiResult<String> {
    let prefix1 = request.name_prefix_1();
    let prefix2 = request.name_prefix_2();
    let mut store_name = request.store_name().to_string();
    let use_new_name = !store_name.is_empty() || !prefix1.is_empty() || !prefix2.is_empty();

    if use_new_name {
        if store_name.is_empty() {
            store_name = request.store().to_string();
        }
        if store_name.is_empty() {
            return Err(ApiError::MissingStoreName);
        }
        Ok(format!("{prefix1}{prefix2}{store_name}"))
    } else {
        let store = store_from_selection(match request.store() {
            "" => None,
            s => Some(s),
        });
        let file_label = request.file_label();
        if file_label.is_empty() {
            return Err(ApiError::MissingFileLabel);
        }
        Ok(format!("{store}_{file_label}"))
    }
}

// ==========================================
// preview
// ==========================================
/// Counts for the client preview; writes nothing.
pub fn handle_preview(request: &EngineRequest) -> ApiResult<PreviewResponse> {
    let extraction = extract_validated(request)?;
    Ok(PreviewResponse {
        ok: true,
        total: extraction.total(),
        unique: extraction.unique.len(),
        duplicates: extraction.duplicates.len(),
    })
}

// ==========================================
// process
// ==========================================
/// Full pipeline: extract → dedup → order → batch → write → zip.
pub fn handle_process(request: &EngineRequest) -> ApiResult<ProcessResponse> {
    let extraction = extract_validated(request)?;
    let base_label = resolve_base_label(request)?;

    if extraction.unique.is_empty() {
        return Err(ApiError::NoValidAsins);
    }

    let batches = request.batch_count();
    if batches > extraction.unique.len() {
        return Err(ApiError::TooManyBatches {
            unique: extraction.unique.len(),
            batches,
        });
    }

    let out_dir = request.output_dir();
    ensure_folder(&out_dir)?;

    let total = extraction.total();
    let unique_count = extraction.unique.len();
    let duplicate_count = extraction.duplicates.len();

    let ordered = reorder(extraction.unique, request.order());

    // Fresh timestamped working folder per invocation.
    let now = Local::now();
    let folder_name = format!(
        "{}_{}_{}",
        sanitize_filename(&base_label),
        now.format("%d%m%y"),
        now.format("%H%M")
    );
    let work_dir = out_dir.join(folder_name);
    ensure_folder(&work_dir)?;

    let batch_list = split_in_batches(ordered, batches);
    let out_files = write_batches(&batch_list, &work_dir, request.market(), &base_label)?;

    let mut output_folder = work_dir.display().to_string();
    let mut zip_path = String::new();
    if request.zip_output() {
        let target = out_dir.join(format!("{}.zip", sanitize_filename(&base_label)));
        zip_outputs(&out_files, &target)?;
        cleanup_work_dir(&work_dir);
        zip_path = target.display().to_string();
        output_folder = String::new();
    }

    Ok(ProcessResponse {
        ok: true,
        total,
        unique: unique_count,
        duplicates: duplicate_count,
        output_folder,
        zip_path,
    })
}

// ==========================================
// export_duplicates
// ==========================================
/// Duplicate CSV report, independent of the batching flow.
pub fn handle_export_duplicates(request: &EngineRequest) -> ApiResult<DuplicatesResponse> {
    let extraction = extract_validated(request)?;
    let out_dir = request.output_dir();

    let csv_path = export_duplicates_csv(&extraction.duplicates, &out_dir)?
        .map(|p: PathBuf| p.display().to_string())
        .unwrap_or_default();

    Ok(DuplicatesResponse {
        ok: true,
        duplicates: extraction.duplicates.len(),
        csv_path,
    })
}

// ==========================================
// Dispatch
// ==========================================
/// Route a parsed request to its handler.
pub fn handle_request(request: &EngineRequest) -> ApiResult<serde_json::Value> {
    let to_value = |v: Result<serde_json::Value, serde_json::Error>| -> ApiResult<_> {
        v.map_err(|e| ApiError::Other(e.into()))
    };
    match request.action().as_str() {
        "preview" => to_value(serde_json::to_value(handle_preview(request)?)),
        "process" => to_value(serde_json::to_value(handle_process(request)?)),
        "export_duplicates" => to_value(serde_json::to_value(handle_export_duplicates(request)?)),
        _ => Err(ApiError::UnknownAction),
    }
}

/// Outermost boundary: raw request JSON in, response JSON out.
/// Never fails; every error becomes the uniform failure payload.
pub fn respond(raw: &str) -> serde_json::Value {
    let result = if raw.trim().is_empty() {
        Err(ApiError::NoInputReceived)
    } else {
        serde_json::from_str::<EngineRequest>(raw)
            .map_err(|e| ApiError::InvalidPayload(e.to_string()))
            .and_then(|request| handle_request(&request))
    };

    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, "request failed");
            serde_json::to_value(FailureResponse {
                ok: false,
                error: err.to_string(),
                traceback: err.trace(),
            })
            .unwrap_or_else(|_| {
                serde_json::json!({ "ok": false, "error": err.to_string(), "traceback": "" })
            })
        }
    }
}
