#[cfg(test)]
pub const POST_DATA: &str = "@title Java 21: O que há de novo
@description Um resumo das novidades do Java 21

# Java 21

O Java 21 é uma versão LTS com várias novidades.

## Destaques
- Virtual threads
- Record patterns
- Sequenced collections

> Atualize já o seu JDK!

Use `var` & <generics> com cuidado.
";

#[cfg(test)]
pub const EVENT_DATA: &str = "<!-- date: 2025-03-15 -->
<!-- location: Luanda, Angola -->
<!-- type: workshop -->

# Workshop de Spring Boot

Venha aprender **Spring Boot** connosco.

- Traga o seu portátil
- Java 17+ instalado
";

#[cfg(test)]
pub const MEMBER_DATA: &str = "@name Ana Silva
@socials twitter:https://x.com/anasilva, linkedin:https://linkedin.com/in/anasilva

# Sobre mim

Desenvolvedora Java há 10 anos.

- Spring
- Quarkus
";
