mod resolver_factory;

pub use resolver_factory::ResolverFactory;
