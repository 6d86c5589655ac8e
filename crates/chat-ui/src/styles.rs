//! Centralized style constants for consistent theming across the chat UI components

// Background colors with dark mode support
pub const CONTAINER_BG: &str = "bg-gray-50 dark:bg-gray-900";
pub const CARD_BG: &str = "bg-white dark:bg-gray-800";

// Text colors with dark mode support
pub const PRIMARY_TEXT: &str = "text-gray-900 dark:text-gray-100";
pub const SECONDARY_TEXT: &str = "text-gray-700 dark:text-gray-300";
pub const TERTIARY_TEXT: &str = "text-gray-600 dark:text-gray-400";
pub const MUTED_TEXT: &str = "text-gray-500 dark:text-gray-400";

// Border colors with dark mode support
pub const PRIMARY_BORDER: &str = "border-gray-200 dark:border-gray-700";

// Message bubble styles
pub const USER_BUBBLE_COLORS: &str =
    "bg-blue-100 dark:bg-blue-900 ml-10 md:ml-20 border border-blue-200 dark:border-blue-800";
pub const ASSISTANT_BUBBLE_COLORS: &str =
    "bg-white dark:bg-gray-700 mr-10 md:mr-20 border border-gray-200 dark:border-gray-600";

// Input styles
pub const INPUT_COLORS: &str =
    "border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200";

// Common layout patterns
pub const FLEX_COL: &str = "flex flex-col";
pub const FLEX_COL_GAP_4: &str = "flex flex-col gap-4";
pub const FLEX_CENTER: &str = "flex items-center";
pub const FLEX_BETWEEN: &str = "flex justify-between items-center";

// Common spacing
pub const STANDARD_PADDING: &str = "p-4";
pub const HEADER_PADDING: &str = "px-4 py-3";

// Shadows and rounded corners
pub const ROUNDED_STANDARD: &str = "rounded-lg";

// Transitions
pub const TRANSITION_COLORS: &str = "transition-colors duration-200";

// Utility function to combine multiple style constants
#[must_use]
pub fn combine_styles(styles: &[&str]) -> String {
    styles.join(" ")
}
