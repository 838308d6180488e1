//! Template descriptors and the built-in registry.
//!
//! The registry is a static table loaded once; nothing mutates it at runtime.
//! Adding a template means adding a row to [`BUILTIN_TEMPLATES`].

use std::fmt;

use crate::domain::value_objects::DependencyRoot;

/// Namespace every built-in `remote_path` is resolved against.
pub const DEFAULT_BASE_NAMESPACE: &str = "radixdlt/";

/// One selectable starter project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateDescriptor {
    /// Label shown in the selection list.
    pub display_name: &'static str,
    /// Path relative to the base namespace, e.g.
    /// `official-examples/getting-started/vanilla-js-dapp`.
    pub remote_path: &'static str,
    /// Where `npm install` runs once the template is on disk.
    pub dependency_root: DependencyRoot,
}

impl TemplateDescriptor {
    pub const fn new(
        display_name: &'static str,
        remote_path: &'static str,
        dependency_root: DependencyRoot,
    ) -> Self {
        Self {
            display_name,
            remote_path,
            dependency_root,
        }
    }

    /// Fully qualified reference: `base_namespace` + `remote_path`.
    pub fn qualified_path(&self, base_namespace: &str) -> String {
        format!("{}{}", base_namespace, self.remote_path)
    }
}

impl fmt::Display for TemplateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name)
    }
}

/// The templates shipped with the tool, in presentation order.
pub static BUILTIN_TEMPLATES: &[TemplateDescriptor] = &[
    TemplateDescriptor::new(
        "Vanilla - JS",
        "official-examples/getting-started/vanilla-js-dapp",
        DependencyRoot::ProjectRoot,
    ),
    TemplateDescriptor::new(
        "React - JS",
        "official-examples/getting-started/react-js-dapp",
        DependencyRoot::ProjectRoot,
    ),
    TemplateDescriptor::new(
        "React - TS",
        "official-examples/getting-started/react-ts-dapp",
        DependencyRoot::ProjectRoot,
    ),
    TemplateDescriptor::new(
        "Svelte - JS",
        "official-examples/getting-started/svelte-js-dapp",
        DependencyRoot::ProjectRoot,
    ),
    TemplateDescriptor::new(
        "Svelte - TS",
        "official-examples/getting-started/svelte-ts-dapp",
        DependencyRoot::ProjectRoot,
    ),
    TemplateDescriptor::new(
        "Fullstack Gumball Machine - JS",
        "official-examples/step-by-step/10-gumball-machine-front-end",
        DependencyRoot::ClientSubdirectory,
    ),
    TemplateDescriptor::new(
        "Fullstack Radiswap JS",
        "official-examples/step-by-step/21-radiswap-dapp",
        DependencyRoot::ClientSubdirectory,
    ),
];

/// Read-only, ordered view over a set of template descriptors.
#[derive(Debug, Clone, Copy)]
pub struct TemplateRegistry {
    templates: &'static [TemplateDescriptor],
}

impl TemplateRegistry {
    /// Registry over [`BUILTIN_TEMPLATES`].
    pub const fn builtin() -> Self {
        Self {
            templates: BUILTIN_TEMPLATES,
        }
    }

    pub fn templates(&self) -> &'static [TemplateDescriptor] {
        self.templates
    }

    pub fn display_names(&self) -> Vec<&'static str> {
        self.templates.iter().map(|t| t.display_name).collect()
    }

    pub fn get(&self, index: usize) -> Option<&'static TemplateDescriptor> {
        self.templates.get(index)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn builtin_registry_has_seven_templates_in_order() {
        let names = TemplateRegistry::builtin().display_names();
        assert_eq!(
            names,
            vec![
                "Vanilla - JS",
                "React - JS",
                "React - TS",
                "Svelte - JS",
                "Svelte - TS",
                "Fullstack Gumball Machine - JS",
                "Fullstack Radiswap JS",
            ]
        );
    }

    #[test]
    fn remote_paths_are_unique() {
        let registry = TemplateRegistry::builtin();
        let paths: HashSet<_> = registry.templates().iter().map(|t| t.remote_path).collect();
        assert_eq!(paths.len(), registry.templates().len());
    }

    #[test]
    fn only_fullstack_templates_use_client_dir() {
        for template in TemplateRegistry::builtin().templates() {
            let fullstack = template.display_name.starts_with("Fullstack");
            assert_eq!(
                template.dependency_root == DependencyRoot::ClientSubdirectory,
                fullstack,
                "{}",
                template.display_name
            );
        }
    }

    #[test]
    fn qualified_path_prefixes_namespace() {
        let vanilla = TemplateRegistry::builtin().get(0).unwrap();
        assert_eq!(
            vanilla.qualified_path(DEFAULT_BASE_NAMESPACE),
            "radixdlt/official-examples/getting-started/vanilla-js-dapp"
        );
    }

    #[test]
    fn get_out_of_range_is_none() {
        assert!(TemplateRegistry::builtin().get(99).is_none());
    }
}
