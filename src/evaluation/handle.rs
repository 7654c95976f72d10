use std::fmt;
use std::path::Path;

use log::info;

use crate::project::{Project, ProjectError};

use super::{Evaluation, EvaluationError};

/// What holds a project's editor lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    /// Project editor (parameters, tests)
    Editor,
    /// Evaluation (scoring, saving)
    Evaluation,
}

impl fmt::Display for EditorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorKind::Editor => f.write_str("project editor"),
            EditorKind::Evaluation => f.write_str("evaluation"),
        }
    }
}

/// The authoritative project of one test system, with its editor lock.
#[derive(Debug)]
pub struct ProjectHandle {
    name: String,
    project: Project,
    editor: Option<EditorKind>,
}

impl ProjectHandle {
    /// Wrap a project for the named system
    pub fn new(name: impl Into<String>, project: Project) -> Self {
        Self {
            name: name.into(),
            project,
            editor: None,
        }
    }

    /// Load a project file for the named system
    pub fn load<P: AsRef<Path>>(name: impl Into<String>, path: P) -> Result<Self, ProjectError> {
        Ok(Self::new(name, Project::load_json(path)?))
    }

    /// System name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current project
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// What currently holds the lock, if anything
    pub fn locked_by(&self) -> Option<EditorKind> {
        self.editor
    }

    fn check_unlocked(&self) -> Result<(), EvaluationError> {
        match self.editor {
            Some(holder) => Err(EvaluationError::ProjectLocked {
                project: self.project.name.clone(),
                holder,
            }),
            None => Ok(()),
        }
    }

    /// Take the lock for an editor that outlives a single call.
    /// Release it with [`ProjectHandle::close_editors`].
    pub fn open_editor(&mut self, kind: EditorKind) -> Result<(), EvaluationError> {
        self.check_unlocked()?;
        self.editor = Some(kind);
        info!("{}: Opened a {} for {}", self.name, kind, self.project.name);
        Ok(())
    }

    /// Release the lock
    pub fn close_editors(&mut self) {
        if let Some(kind) = self.editor.take() {
            info!("{}: Closed the {} for {}", self.name, kind, self.project.name);
        }
    }

    /// Mutable access for an open project editor
    pub fn project_mut(&mut self) -> Result<&mut Project, EvaluationError> {
        match self.editor {
            Some(EditorKind::Editor) => Ok(&mut self.project),
            Some(holder) => Err(EvaluationError::ProjectLocked {
                project: self.project.name.clone(),
                holder,
            }),
            None => Err(EvaluationError::ProjectLocked {
                project: self.project.name.clone(),
                holder: EditorKind::Editor,
            }),
        }
    }

    /// Open an evaluation; the lock is held until it is dropped
    pub fn evaluate(&mut self) -> Result<Evaluation<'_>, EvaluationError> {
        self.check_unlocked()?;
        info!("{}: Opened an evaluation for {}", self.name, self.project.name);
        Ok(Evaluation::locked(&mut self.project, &mut self.editor))
    }

    /// Re-read the project from its file, discarding unsaved changes
    pub fn reload(&mut self) -> Result<(), EvaluationError> {
        self.check_unlocked()?;
        let path = self
            .project
            .path
            .clone()
            .ok_or_else(|| ProjectError::MissingPath(self.project.name.clone()))?;
        self.project = Project::load_json(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_blocks_evaluation() {
        let mut handle = ProjectHandle::new("System 1", Project::new("Locked"));
        handle.open_editor(EditorKind::Editor).unwrap();

        let err = handle.evaluate().err().unwrap();
        assert!(matches!(
            err,
            EvaluationError::ProjectLocked {
                holder: EditorKind::Editor,
                ..
            }
        ));
        assert!(handle.open_editor(EditorKind::Editor).is_err());

        handle.project_mut().unwrap().limit_psi = 2000.0;
        handle.close_editors();
        assert!(handle.evaluate().is_ok());
        assert_eq!(handle.project().limit_psi, 2000.0);
    }

    #[test]
    fn test_evaluation_releases_lock_on_drop() {
        let mut handle = ProjectHandle::new("System 1", Project::new("Scoped"));
        {
            let _evaluation = handle.evaluate().unwrap();
        }
        assert_eq!(handle.locked_by(), None);
        assert!(handle.project_mut().is_err());
    }

    #[test]
    fn test_reload_requires_path() {
        let mut handle = ProjectHandle::new("System 1", Project::new("Unsaved"));
        assert!(matches!(
            handle.reload(),
            Err(EvaluationError::Project(ProjectError::MissingPath(_)))
        ));
    }
}
