//! Language selection and the fixed user-facing message catalogs.
//!
//! The tool ships exactly two string sets, English and Indonesian. The
//! active [`Language`] is chosen once from the CLI and threaded through
//! every user-facing function; there is no global language state.

use clap::ValueEnum;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    /// English
    En,
    /// Indonesian (default)
    #[default]
    Id,
}

impl Language {
    pub fn messages(self) -> &'static Messages {
        match self {
            Language::En => &EN,
            Language::Id => &ID,
        }
    }
}

/// One complete set of user-facing strings.
#[derive(Debug)]
pub struct Messages {
    pub enter_api_key: &'static str,
    pub api_key_empty: &'static str,
    pub changed_files_failed: &'static str,
    pub diff_failed: &'static str,
    pub no_diff_changes: &'static str,
    pub invalid_response: &'static str,
    pub fetch_messages_failed: &'static str,
    pub no_changes_to_commit: &'static str,
    pub select_files: &'static str,
    pub all_files: &'static str,
    pub no_files_selected: &'static str,
    pub choose_message: &'static str,
    pub committed: &'static str,
    pub error_occurred: &'static str,
}

static EN: Messages = Messages {
    enter_api_key: "Enter your Groq API Key:",
    api_key_empty: "API Key cannot be empty!",
    changed_files_failed: "Failed to get changed files:",
    diff_failed: "Failed to get git diff:",
    no_diff_changes: "No changes detected in git diff.",
    invalid_response: "Invalid response from Groq.",
    fetch_messages_failed: "Failed to fetch commit messages:",
    no_changes_to_commit: "No changes to commit.",
    select_files: "Select files to commit:",
    all_files: "All files",
    no_files_selected: "No files selected. Process aborted.",
    choose_message: "Choose a commit message:",
    committed: "Successfully committed:",
    error_occurred: "An error occurred:",
};

static ID: Messages = Messages {
    enter_api_key: "Masukkan Groq API Key Anda:",
    api_key_empty: "API Key tidak boleh kosong!",
    changed_files_failed: "Gagal mendapatkan daftar file yang diubah:",
    diff_failed: "Gagal mendapatkan git diff:",
    no_diff_changes: "Tidak ada perubahan terdeteksi di git diff.",
    invalid_response: "Response dari Groq tidak valid.",
    fetch_messages_failed: "Gagal mengambil commit messages:",
    no_changes_to_commit: "Tidak ada perubahan yang perlu dikomit.",
    select_files: "Pilih file yang ingin ditambahkan ke commit:",
    all_files: "Semua file",
    no_files_selected: "Tidak ada file yang dipilih. Proses dihentikan.",
    choose_message: "Pilih pesan commit:",
    committed: "Berhasil commit:",
    error_occurred: "Terjadi kesalahan:",
};
