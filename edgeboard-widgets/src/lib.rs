pub mod alert;
pub mod autocomplete;
pub mod drop_zone;
pub mod input;
pub mod paged_list;
pub mod record;
pub mod spinner;
pub mod tabs;
pub mod text;
pub mod theme;

pub use alert::{Alert, AlertBanners, AlertOutcome, AlertStack, AlertVariant};
pub use autocomplete::{Autocomplete, AutocompleteOutcome, AutocompleteState};
pub use drop_zone::{DropOutcome, DropZone, DropZoneState};
pub use input::{InputOutcome, InputState};
pub use paged_list::{
    Column, FilterablePagedList, PagedListFocus, PagedListOutcome, PagedListState,
    DEFAULT_PAGE_SIZE_OPTIONS,
};
pub use record::{Record, Value};
pub use spinner::{Skeleton, Spinner};
pub use tabs::{TabBar, TabsOutcome, TabsState};
pub use theme::Theme;
