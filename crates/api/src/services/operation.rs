use std::fmt;

/// The seven resource operations.
///
/// Each carries the fixed message a caller sees when the store fails
/// underneath it; the real cause only goes to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreatePost,
    CreateComment,
    ListPosts,
    GetPost,
    ListComments,
    UpdatePost,
    DeletePost,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::CreatePost => "Error creating post",
            Operation::CreateComment => "Error creating comment",
            Operation::ListPosts => "Error getting posts",
            Operation::GetPost => "Error getting post",
            Operation::ListComments => "Error getting comments",
            Operation::UpdatePost => "Error updating post",
            Operation::DeletePost => "Error deleting post",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::CreatePost => "create_post",
            Operation::CreateComment => "create_comment",
            Operation::ListPosts => "list_posts",
            Operation::GetPost => "get_post",
            Operation::ListComments => "list_comments",
            Operation::UpdatePost => "update_post",
            Operation::DeletePost => "delete_post",
        };
        f.write_str(name)
    }
}
