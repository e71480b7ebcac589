pub extern crate pest;
pub extern crate pest_derive;

use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "chordseed/notes.pest"]
pub struct NoteParser;
