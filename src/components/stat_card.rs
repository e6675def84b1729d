//! Stat Card Component
//!
//! A labelled count with an icon, used on the dashboard and profile.

use leptos::*;

/// Accent used for the icon badge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Orange,
    Purple,
}

impl Accent {
    fn gradient(self) -> &'static str {
        match self {
            Self::Blue => "from-blue-500 to-blue-600",
            Self::Green => "from-green-500 to-green-600",
            Self::Orange => "from-orange-500 to-orange-600",
            Self::Purple => "from-purple-500 to-purple-600",
        }
    }
}

/// Dashboard stat card
#[component]
pub fn StatCard(
    label: &'static str,
    icon: &'static str,
    accent: Accent,
    /// Count to display
    #[prop(into)]
    value: Signal<u64>,
) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl p-6 border border-gray-200 dark:border-gray-700 hover:shadow-lg transition">
            <div class="flex items-center space-x-4">
                <div class=format!(
                    "w-12 h-12 bg-gradient-to-r {} rounded-xl flex items-center justify-center text-2xl shadow-lg",
                    accent.gradient()
                )>
                    {icon}
                </div>
                <div>
                    <p class="text-sm font-medium text-gray-600 dark:text-gray-400 mb-1">{label}</p>
                    <p class="text-3xl font-bold text-gray-900 dark:text-white">
                        {move || value.get()}
                    </p>
                </div>
            </div>
        </div>
    }
}

/// Compact tile for the profile's account statistics
#[component]
pub fn StatTile(label: &'static str, icon: &'static str, accent: Accent, value: u64) -> impl IntoView {
    view! {
        <div class=format!(
            "rounded-xl p-6 flex flex-col items-center justify-center shadow-lg bg-gradient-to-br {} text-white",
            accent.gradient()
        )>
            <div class="mb-2 text-2xl">{icon}</div>
            <div class="text-3xl font-bold">{value}</div>
            <div class="text-sm font-medium mt-1">{label}</div>
        </div>
    }
}
