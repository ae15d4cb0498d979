//! `CompositeInjector`: aplica una secuencia de `PropInjector` de forma
//! determinista y mezcla sus resultados.

use super::injector::PropInjector;
use super::node::{InputNode, Props};

/// Aplica una serie de inyectores en orden. Ante claves repetidas gana el
/// último inyector de la lista.
#[derive(Default)]
pub struct CompositeInjector<'a> {
    pub injectors: Vec<Box<dyn PropInjector + 'a>>,
}

impl<'a> CompositeInjector<'a> {
    /// Crea un `CompositeInjector` vacío.
    pub fn new() -> Self {
        Self { injectors: vec![] }
    }

    /// Crea un `CompositeInjector` con la lista dada de inyectores.
    pub fn with_injectors(injectors: Vec<Box<dyn PropInjector + 'a>>) -> Self {
        Self { injectors }
    }

    pub fn push(mut self, injector: impl PropInjector + 'a) -> Self {
        self.injectors.push(Box::new(injector));
        self
    }
}

impl PropInjector for CompositeInjector<'_> {
    fn inject(&self, node: &InputNode) -> Props {
        let mut accumulated = Props::new();
        for injector in self.injectors.iter() {
            for (k, v) in injector.inject(node) {
                accumulated.insert(k, v);
            }
        }
        accumulated
    }
}
