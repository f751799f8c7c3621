pub mod state;

use self::state::{SubmitOutcome, UploadForm, SUCCESS_BANNER};
use crate::domain::a001_order::api;
use crate::shared::browser;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, FileList, HtmlInputElement};

fn collect_files(list: Option<FileList>) -> Vec<File> {
    list.map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default()
}

/// Order upload form: file picker, drop area, contact fields and submit.
#[component]
pub fn UploadWidget() -> impl IntoView {
    let config = use_config();
    let endpoints = StoredValue::new(config.endpoints);
    let banner_timeout_ms = config.timing.banner_timeout_ms;

    // `web_sys::File` is not `Send`, so the form lives in local storage.
    let form = RwSignal::new_local(UploadForm::<File>::new());
    let drag_over = RwSignal::new(false);

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());

        if let Some(input) = input {
            let picked = collect_files(input.files());
            log::debug!("Picked {} file(s)", picked.len());
            form.update(|f| f.add_files(picked));
            // Allow picking the same file again.
            input.set_value("");
        }
    };

    let handle_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_over.set(true);
    };

    let handle_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_over.set(false);
    };

    let handle_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_over.set(false);
        let dropped = collect_files(ev.data_transfer().and_then(|dt| dt.files()));
        log::debug!("Dropped {} file(s)", dropped.len());
        form.update(|f| f.add_files(dropped));
    };

    let handle_submit = move |_| {
        let request = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                browser::alert(&e.to_string());
                return;
            }
            None => return,
        };
        let files = form.with_untracked(|f| f.files().to_vec());
        let Some(endpoints) = endpoints.try_get_value() else {
            return;
        };

        spawn_local(async move {
            let result = api::upload_order(&endpoints, &request.name, &request.phone, &files).await;
            if let Err(e) = &result {
                log::error!("Error uploading files: {}", e);
            }
            match form.try_update(|f| f.finish_submit(result)) {
                Some(SubmitOutcome::Sent { banner }) => {
                    log::info!("Uploaded {} file(s) for {}", files.len(), request.name);
                    TimeoutFuture::new(banner_timeout_ms).await;
                    form.try_update(|f| f.hide_banner(banner));
                }
                Some(SubmitOutcome::Failed(message)) => browser::alert(&message),
                None => {}
            }
        });
    };

    let preview = move || {
        form.with(|f| {
            f.files()
                .iter()
                .enumerate()
                .map(|(position, file)| {
                    view! {
                        <div class="file-preview-item">
                            <span>{file.name()}</span>
                            <button
                                type="button"
                                class="remove-file-btn"
                                aria-label="Remove file"
                                on:click=move |_| {
                                    form.update(|f| {
                                        f.remove_file(position);
                                    })
                                }
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="upload-widget">
            <div
                id="drop-area"
                class="drop-area"
                class:drag-over=move || drag_over.get()
                on:dragenter=handle_drag_enter
                on:dragover=handle_drag_enter
                on:dragleave=handle_drag_leave
                on:drop=handle_drop
            >
                {icon("upload")}
                <p>"Drag & drop your files here, or"</p>
                <label class="btn btn-secondary" for="fileElem">"Browse files"</label>
                <input
                    id="fileElem"
                    type="file"
                    multiple=true
                    class="hidden"
                    on:change=handle_file_select
                />
            </div>

            <div id="file-preview-container" class="file-preview-container">
                {preview}
            </div>

            <div class="upload-fields">
                <input
                    id="customer-name"
                    type="text"
                    placeholder="Your name"
                    prop:value=move || form.with(|f| f.name().to_string())
                    on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                />
                <input
                    id="customer-phone"
                    type="tel"
                    placeholder="Phone number"
                    prop:value=move || form.with(|f| f.phone().to_string())
                    on:input=move |ev| form.update(|f| f.set_phone(event_target_value(&ev)))
                />
            </div>

            <button
                id="send-upload-btn"
                type="button"
                class="btn btn-primary"
                disabled=move || form.with(|f| !f.can_submit())
                on:click=handle_submit
            >
                {move || form.with(|f| f.submit_label())}
            </button>

            <Show when=move || form.with(|f| f.banner_visible())>
                <div id="success-banner" class="success-banner">{SUCCESS_BANNER}</div>
            </Show>
        </div>
    }
}
