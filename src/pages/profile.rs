//! Profile Page
//!
//! Edit form for the signed-in user's details plus account statistics.

use leptos::*;

use crate::components::{Accent, StatTile};
use crate::error::SubmitError;
use crate::format;
use crate::state::profile::{submit_profile, ProfileField, ProfileForm, SimulatedSaver, SubmitStatus};
use crate::state::session::{use_session, User};

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let session = use_session().session;

    // Seeded once; later session changes do not overwrite edits
    let form = create_rw_signal(ProfileForm::from_user(
        session.with_untracked(|s| s.user.clone()).as_ref(),
    ));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        spawn_local(async move {
            let saver = SimulatedSaver::default();
            if let Err(SubmitError::InFlight) = submit_profile(&form, &saver).await {
                tracing::debug!("ignoring submit while a save is running");
            }
        });
    };

    let saving = move || form.with(ProfileForm::is_saving);

    view! {
        <div class="w-full max-w-xl mx-auto py-12">
            <div class="bg-white/70 dark:bg-gray-900/90 rounded-2xl shadow-2xl border border-gray-200/60 dark:border-gray-800/60 p-8 mb-8">
                <ProfileHeader />

                <form on:submit=on_submit class="space-y-6">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <DraftInput form=form field=ProfileField::FirstName placeholder="First Name" />
                        <DraftInput form=form field=ProfileField::LastName placeholder="Last Name" />
                    </div>

                    <div>
                        <label class="block text-gray-700 dark:text-gray-200 mb-1 font-medium">
                            "Email Address *"
                        </label>
                        <input
                            type="email"
                            name="email"
                            prop:value=move || form.with(|f| f.draft().email.clone())
                            disabled=true
                            class="w-full px-3 py-2 rounded-lg bg-white/80 dark:bg-gray-800/80 border border-gray-200 dark:border-gray-700 opacity-80 cursor-not-allowed"
                        />
                    </div>

                    <DraftInput form=form field=ProfileField::Phone placeholder="Phone Number" />
                    <DraftInput form=form field=ProfileField::Address placeholder="Enter your address" />

                    <button
                        type="submit"
                        disabled=saving
                        class="w-full py-3 px-4 text-lg font-semibold rounded-lg bg-gradient-to-r from-blue-500 to-indigo-500
                               text-white shadow-xl hover:from-blue-600 hover:to-indigo-600 disabled:opacity-60
                               disabled:cursor-not-allowed transition-all"
                    >
                        {move || if saving() { "Saving..." } else { "Save Changes" }}
                    </button>

                    <SubmitResult form=form />
                </form>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-2">
                <StatTile label="Events Organized" icon="📅" accent=Accent::Blue value=0 />
                <StatTile label="Events Attended" icon="👥" accent=Accent::Green value=0 />
                <StatTile label="Total Registrations" icon="🎟️" accent=Accent::Purple value=0 />
            </div>
        </div>
    }
}

#[component]
fn ProfileHeader() -> impl IntoView {
    let session = use_session().session;
    let user = move || session.with(|s| s.user.clone());

    view! {
        <div class="flex flex-col items-center mb-6 text-center">
            <div class="w-24 h-24 rounded-full bg-blue-100 dark:bg-gray-700 flex items-center justify-center text-5xl shadow-lg mb-2">
                "👤"
            </div>
            <h2 class="text-2xl font-extrabold text-gray-900 dark:text-gray-100 mb-1">
                {move || user().map(|u| u.full_name()).unwrap_or_default()}
            </h2>
            <p class="text-gray-600 dark:text-gray-300 text-sm">
                "✉ "
                {move || user().map(|u| u.email).unwrap_or_default()}
            </p>
            <p class="text-gray-500 dark:text-gray-400 text-xs mt-1">
                "Member since "
                {move || format::member_since(user().and_then(|u: User| u.created_at).as_deref())}
            </p>
        </div>
    }
}

/// Text input bound to one editable draft field
#[component]
fn DraftInput(
    form: RwSignal<ProfileForm>,
    field: ProfileField,
    placeholder: &'static str,
) -> impl IntoView {
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    view! {
        <div>
            <label class="block text-gray-700 dark:text-gray-200 mb-1 font-medium">{label}</label>
            <input
                type="text"
                prop:value=move || form.with(|f| f.draft().get(field).to_string())
                on:input=move |ev| form.update(|f| f.edit(field, event_target_value(&ev)))
                placeholder=placeholder
                required=field.is_required()
                class="w-full px-3 py-2 rounded-lg bg-white/80 dark:bg-gray-800/80 border border-gray-200 dark:border-gray-700
                       text-gray-900 dark:text-gray-100 focus:ring-2 focus:ring-blue-400 outline-none transition"
            />
        </div>
    }
}

/// Success or failure line under the submit button
#[component]
fn SubmitResult(form: RwSignal<ProfileForm>) -> impl IntoView {
    move || {
        form.with(|f| match f.status() {
            SubmitStatus::Saved => Some(
                view! {
                    <div class="text-green-600 dark:text-green-400 text-center font-medium mt-2">
                        "Profile updated successfully!"
                    </div>
                }
                .into_view(),
            ),
            SubmitStatus::Failed(e) => Some(
                view! {
                    <div class="text-red-600 dark:text-red-400 text-center font-medium mt-2">
                        {e.to_string()}
                    </div>
                }
                .into_view(),
            ),
            SubmitStatus::Idle | SubmitStatus::Saving => None,
        })
    }
}
