//! Shared Tailwind class constants to keep public pages, dashboard and back
//! office visually consistent.

pub struct Theme;

impl Theme {
    /// Card container used for list items and detail panels.
    pub const CARD: &'static str = "block rounded-lg border border-gray-200 bg-white p-6 shadow-sm transition-shadow hover:shadow-md dark:border-gray-700 dark:bg-gray-800";

    /// Text input and textarea styling.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    pub const LINK: &'static str = "text-blue-600 hover:text-blue-800 dark:text-blue-400 dark:hover:text-blue-300";

    /// Table header cell.
    pub const TH: &'static str = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";

    /// Table body cell.
    pub const TD: &'static str = "px-6 py-4 whitespace-nowrap text-sm text-gray-700 dark:text-gray-300";

    /// Table row that highlights on hover.
    pub const ROW: &'static str = "hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors";

    pub const TABLE_WRAPPER: &'static str = "overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg";

    /// Small pill for statuses and tags.
    pub const BADGE: &'static str = "inline-flex items-center rounded-full bg-gray-100 px-2.5 py-0.5 text-xs font-medium text-gray-700 dark:bg-gray-700 dark:text-gray-200";

    pub const SECONDARY_BUTTON: &'static str = "inline-flex items-center px-4 py-2 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 hover:text-blue-700 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:text-white dark:hover:bg-gray-700 disabled:opacity-50 disabled:cursor-not-allowed";

    pub const DANGER_BUTTON: &'static str = "inline-flex items-center px-4 py-2 text-sm font-medium text-white bg-red-600 rounded-lg hover:bg-red-700 focus:ring-4 focus:ring-red-300 dark:focus:ring-red-900";

    /// Rendered CMS/blog body text.
    pub const PROSE: &'static str = "space-y-4 text-base leading-relaxed text-gray-700 dark:text-gray-300";
}
