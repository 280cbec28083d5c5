//! Application state and logic.

use std::path::PathBuf;

use crate::data::{list_csv_files, DataReader, Dataset};
use crate::error::{GenerateError, Result};
use crate::plot::{self, AxisChoice, PlotKind};
use crate::selector::Dropdown;
use crate::util::LayoutConfig;
use crate::viewer::ViewerState;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Widget that receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// File picker.
    File,
    /// X axis picker.
    XAxis,
    /// Y axis picker.
    YAxis,
    /// Plot type picker.
    Plot,
    /// "Generate Plot" button.
    Generate,
}

impl Focus {
    /// Next widget in tab order.
    pub fn next(self) -> Self {
        match self {
            Focus::File => Focus::XAxis,
            Focus::XAxis => Focus::YAxis,
            Focus::YAxis => Focus::Plot,
            Focus::Plot => Focus::Generate,
            Focus::Generate => Focus::File,
        }
    }

    /// Previous widget in tab order.
    pub fn prev(self) -> Self {
        match self {
            Focus::File => Focus::Generate,
            Focus::XAxis => Focus::File,
            Focus::YAxis => Focus::XAxis,
            Focus::Plot => Focus::YAxis,
            Focus::Generate => Focus::Plot,
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Folder the CSV files are listed from.
    pub data_dir: PathBuf,
    /// File picker.
    pub files: Dropdown<String>,
    /// Loaded dataset.
    pub dataset: Option<Dataset>,
    /// X axis picker.
    pub x_axis: Dropdown<AxisChoice>,
    /// Y axis picker.
    pub y_axis: Dropdown<AxisChoice>,
    /// Plot type picker.
    pub plot: Dropdown<PlotKind>,
    /// Figure viewer.
    pub viewer: ViewerState,
    /// Focused widget.
    pub focus: Focus,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Error message from the last file load.
    pub error_message: Option<String>,
    /// Layout settings.
    pub layout: LayoutConfig,
}

impl App {
    /// Create the application over the CSV files of `data_dir`.
    ///
    /// Fails when the directory cannot be listed.
    pub fn new(data_dir: PathBuf, layout: LayoutConfig) -> Result<Self> {
        let files = list_csv_files(&data_dir)?;
        tracing::info!("Listing {} CSV files from {}", files.len(), data_dir.display());

        let status = if files.is_empty() {
            format!("No CSV files in {}", data_dir.display())
        } else {
            "Ready".to_string()
        };

        Ok(Self {
            data_dir,
            files: Dropdown::new("Select a file", files),
            dataset: None,
            x_axis: Dropdown::new("Select the X-axis", Vec::new()),
            y_axis: Dropdown::new("Select the Y-axis", Vec::new()),
            plot: Dropdown::new("Select a Plot", PlotKind::ALL.to_vec()),
            viewer: ViewerState::new(),
            focus: Focus::File,
            status,
            theme: Theme::GruvboxDark,
            error_message: None,
            layout,
        })
    }

    /// Whether an option list is showing.
    pub fn dropdown_open(&self) -> bool {
        self.files.open || self.x_axis.open || self.y_axis.open || self.plot.open
    }

    /// Move focus forward.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus backward.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Activate the focused widget: open a picker or press the button.
    pub fn activate(&mut self) {
        match self.focus {
            Focus::File => self.files.open(),
            Focus::XAxis => self.x_axis.open(),
            Focus::YAxis => self.y_axis.open(),
            Focus::Plot => self.plot.open(),
            Focus::Generate => self.generate_plot(),
        }
    }

    /// Move the highlight of the open picker up.
    pub fn option_up(&mut self) {
        match self.focus {
            Focus::File => self.files.cursor_up(),
            Focus::XAxis => self.x_axis.cursor_up(),
            Focus::YAxis => self.y_axis.cursor_up(),
            Focus::Plot => self.plot.cursor_up(),
            Focus::Generate => {},
        }
    }

    /// Move the highlight of the open picker down.
    pub fn option_down(&mut self) {
        match self.focus {
            Focus::File => self.files.cursor_down(),
            Focus::XAxis => self.x_axis.cursor_down(),
            Focus::YAxis => self.y_axis.cursor_down(),
            Focus::Plot => self.plot.cursor_down(),
            Focus::Generate => {},
        }
    }

    /// Close the open picker without changing its choice.
    pub fn cancel_dropdown(&mut self) {
        self.files.close();
        self.x_axis.close();
        self.y_axis.close();
        self.plot.close();
    }

    /// Confirm the highlighted option of the open picker.
    pub fn confirm_dropdown(&mut self) {
        let changed = match self.focus {
            Focus::File => {
                if self.files.confirm() {
                    self.load_selected_file();
                }
                return;
            },
            Focus::XAxis => self.x_axis.confirm(),
            Focus::YAxis => self.y_axis.confirm(),
            Focus::Plot => self.plot.confirm(),
            Focus::Generate => false,
        };

        if changed {
            self.viewer.clear();
        }
    }

    /// Select the file at `index` and load it.
    pub fn select_file(&mut self, index: usize) {
        if self.files.select(index) {
            self.load_selected_file();
        }
    }

    /// Load the file chosen in the file picker.
    pub fn load_selected_file(&mut self) {
        let Some(name) = self.files.selected().cloned() else {
            return;
        };
        let path = self.data_dir.join(&name);
        self.status = format!("Loading {}...", name);
        self.viewer.clear();

        match DataReader::read_csv(&path) {
            Ok(dataset) => {
                let options = AxisChoice::options_for(&dataset);
                self.x_axis.set_options(options.clone());
                self.y_axis.set_options(options);
                self.status = format!(
                    "{} loaded ({} rows, {} columns)",
                    name,
                    dataset.rows,
                    dataset.columns.len()
                );
                self.dataset = Some(dataset);
                self.error_message = None;
            },
            Err(e) => {
                tracing::error!("Error loading {}: {}", path.display(), e);
                self.dataset = None;
                self.x_axis.set_options(Vec::new());
                self.y_axis.set_options(Vec::new());
                self.error_message = Some(format!("Error loading file: {}", e));
                self.status = "Error loading file".to_string();
            },
        }
    }

    /// Selected x axis; an untouched picker counts as `None`.
    pub fn x_choice(&self) -> AxisChoice {
        self.x_axis.selected().cloned().unwrap_or_default()
    }

    /// Selected y axis; an untouched picker counts as `None`.
    pub fn y_choice(&self) -> AxisChoice {
        self.y_axis.selected().cloned().unwrap_or_default()
    }

    /// Press "Generate Plot".
    pub fn generate_plot(&mut self) {
        let Some(ref dataset) = self.dataset else {
            self.status = "Select a file first".to_string();
            return;
        };

        let x = self.x_choice();
        let y = self.y_choice();
        let kind = self.plot.selected().copied();
        let outcome = plot::generate(dataset, &x, &y, kind);

        self.status = match &outcome {
            Ok(figure) => figure.title.clone(),
            Err(GenerateError::Validation(msg)) => msg.clone(),
            Err(GenerateError::Render(e)) => format!("Plot failed: {}", e),
        };
        self.viewer.show(outcome);
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Cycle the heatmap palette.
    pub fn cycle_palette(&mut self) {
        self.viewer.cycle_color_palette();
        self.status = format!("Palette: {}", self.viewer.color_palette.name());
    }
}
