pub mod open_difftool;
