mod preferences;
mod screen;
mod shell;
