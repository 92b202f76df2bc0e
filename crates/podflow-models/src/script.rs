//! The structured script record produced by the remote generation service.
//!
//! The remote service reports its fields under human-readable JSON keys
//! ("Opening Hook", "Vocab 1", ...). Every field is optional: the initial
//! generation response populates most of them, while the post-processing
//! response carries only the fields it changed.

use serde::{Deserialize, Serialize};

macro_rules! define_script_record {
    ($($field:ident: $key:literal,)+) => {
        /// Structured multi-field script content for one project.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct ScriptRecord {
            $(
                #[serde(rename = $key, skip_serializing_if = "Option::is_none")]
                pub $field: Option<String>,
            )+
        }

        impl ScriptRecord {
            /// Merges a partial record into this one.
            ///
            /// Field-wise and all-or-nothing from the caller's perspective:
            /// a populated field in `patch` overwrites, an absent field
            /// leaves the existing value untouched.
            pub fn merge(&mut self, patch: ScriptRecord) {
                $(
                    if patch.$field.is_some() {
                        self.$field = patch.$field;
                    }
                )+
            }

            /// Returns true if no field is populated.
            pub fn is_empty(&self) -> bool {
                $( self.$field.is_none() )&&+
            }
        }
    };
}

define_script_record! {
    project_name: "Project Name",
    project_id: "Project ID",
    date_created: "Date Created",
    keyword_id: "Keyword ID",
    keyword_url: "Keyword URL",
    folder_id: "Folder ID",
    folder_url: "Folder URL",
    video_id: "Video ID",
    video_url: "Video URL",
    image_id: "Image ID",
    image_url: "Image URL",
    script_doc_id: "ScriptDoc ID",
    script_doc_url: "ScriptDoc URL",
    opening_hook: "Opening Hook",
    part_1: "Part 1",
    part_2: "Part 2",
    part_3: "Part 3",
    vocab_1: "Vocab 1",
    vocab_2: "Vocab 2",
    vocab_3: "Vocab 3",
    vocab_4: "Vocab 4",
    vocab_5: "Vocab 5",
    grammar_topic: "Grammar Topic",
}

impl ScriptRecord {
    /// Compiles the editable sections into the full narration text.
    ///
    /// Mirrors the layout the script editor produces when the user approves
    /// without hand-editing: hook, three body parts, numbered vocabulary,
    /// grammar focus.
    pub fn compile_script(&self) -> String {
        let field = |f: &Option<String>| f.as_deref().unwrap_or("").to_string();
        format!(
            "Opening Hook:\n{}\n\n\
             Part 1 (Story/Introduction):\n{}\n\n\
             Part 2 (Problem/Cause):\n{}\n\n\
             Part 3 (Solution/Call to Action):\n{}\n\n\
             Vocabulary:\n1. {}\n2. {}\n3. {}\n4. {}\n5. {}\n\n\
             Grammar Focus:\n{}",
            field(&self.opening_hook),
            field(&self.part_1),
            field(&self.part_2),
            field(&self.part_3),
            field(&self.vocab_1),
            field(&self.vocab_2),
            field(&self.vocab_3),
            field(&self.vocab_4),
            field(&self.vocab_5),
            field(&self.grammar_topic),
        )
    }
}

/// Normalized result of a media-generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// URL of the generated video, if the call produced one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    /// URL of the generated image, if the call produced one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl MediaRecord {
    /// Returns true if neither URL is populated.
    pub fn is_empty(&self) -> bool {
        self.video_url.is_none() && self.image_url.is_none()
    }
}
