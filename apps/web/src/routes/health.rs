use crate::app_lib::{build_info, config};
use leptos::prelude::*;

/// Build metadata and the API base the bundle talks to.
#[component]
pub fn HealthPage() -> impl IntoView {
    let commit = build_info::git_commit_hash();
    let config = config::load();

    view! {
        <div class="flex justify-center">
            <div class="block max-w-[38rem] rounded-lg border border-neutral-200 bg-white dark:border-neutral-300 dark:bg-neutral-600">
                <div class="border-b-2 border-[#0000002d] px-6 py-3 text-neutral-600 dark:text-neutral-50 font-semibold">
                    "Build Version"
                </div>
                <dl class="p-6 space-y-2 text-base text-black dark:text-neutral-50">
                    <div class="flex gap-4"><dt class="font-medium">"Commit"</dt><dd><pre>{commit}</pre></dd></div>
                    <div class="flex gap-4">
                        <dt class="font-medium">"API"</dt>
                        <dd><pre>{config.api_base_url}</pre></dd>
                    </div>
                    <div class="flex gap-4">
                        <dt class="font-medium">"Locale"</dt>
                        <dd><pre>{config.locale.as_str()}</pre></dd>
                    </div>
                </dl>
            </div>
        </div>
    }
}
