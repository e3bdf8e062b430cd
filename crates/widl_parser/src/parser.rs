//! The WebIDL parser implementation.
//!
//! A recursive descent parser with one token of lookahead. Each grammar
//! production is a dedicated method that consumes exactly the tokens of its
//! production and fails on the first mismatch; there is no backtracking and
//! no error recovery. The first error aborts the parse and is returned as a
//! [`ParseError`] positioned at the offending token.

use widl_ast::ast::*;
use widl_ast::SyntaxKind;
use widl_core::text::TextRange;
use widl_diagnostics::ParseError;
use widl_scanner::Scanner;

/// Which body the member parser is inside. The member grammar differs
/// between the four brace-delimited containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    Interface,
    Mixin,
    CallbackInterface,
    Namespace,
}

/// The parser produces an ordered `Vec<Definition>` from WebIDL source text.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    /// End offset of the most recently consumed token, for node spans.
    prev_end: u32,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            scanner: Scanner::new(text),
            prev_end: 0,
        }
    }

    /// Parse the whole input as a sequence of definitions.
    pub fn parse(mut self) -> Result<Vec<Definition>, ParseError> {
        self.bump()?;
        let mut definitions = Vec::new();
        while !self.at(SyntaxKind::EndOfFileToken) {
            definitions.push(self.parse_definition()?);
        }
        Ok(definitions)
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    fn cur(&self) -> SyntaxKind {
        self.scanner.token()
    }

    #[inline]
    fn at(&self, kind: SyntaxKind) -> bool {
        self.cur() == kind
    }

    /// Advance to the next token.
    fn bump(&mut self) -> Result<(), ParseError> {
        self.prev_end = self.scanner.token_end() as u32;
        self.scanner.scan()?;
        Ok(())
    }

    /// Consume the current token if it has the given kind.
    fn eat(&mut self, kind: SyntaxKind) -> Result<bool, ParseError> {
        if self.at(kind) {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume a required token or fail with a "'X' expected" error.
    fn expect(&mut self, kind: SyntaxKind) -> Result<(), ParseError> {
        if self.at(kind) {
            self.bump()
        } else {
            let text = kind.token_text().unwrap_or("token");
            Err(self
                .error(format!("'{}' expected, but found {}", text, self.found()))
                .with_expected(format!("'{}'", text)))
        }
    }

    #[inline]
    fn token_pos(&self) -> u32 {
        self.scanner.token_start() as u32
    }

    /// Span from a start offset through the last consumed token.
    fn span_from(&self, start: u32) -> TextRange {
        TextRange::new(start, self.prev_end.max(start))
    }

    /// A syntax error at the current token.
    fn error(&self, message: String) -> ParseError {
        ParseError::syntax(message, self.scanner.token_range(), self.scanner.token_location())
    }

    /// Describe the current token for expectation messages.
    fn found(&self) -> String {
        if self.at(SyntaxKind::EndOfFileToken) {
            "end of input".to_string()
        } else {
            format!("'{}'", self.scanner.token_text())
        }
    }

    fn expected_one_of(&self, alternatives: &str) -> ParseError {
        self.error(format!(
            "expected one of: {}, but found {}",
            alternatives,
            self.found()
        ))
        .with_expected(alternatives.to_string())
    }

    /// Consume an identifier and return its (escape-stripped) text.
    fn parse_identifier(&mut self) -> Result<String, ParseError> {
        if self.at(SyntaxKind::Identifier) {
            let name = self.scanner.token_value().to_string();
            self.bump()?;
            Ok(name)
        } else {
            Err(self
                .error(format!("identifier expected, but found {}", self.found()))
                .with_expected("identifier".to_string()))
        }
    }

    /// Consume a name token that may also be one of the given keywords.
    fn parse_name_allowing(&mut self, keywords: &[SyntaxKind]) -> Result<String, ParseError> {
        if self.at(SyntaxKind::Identifier) || keywords.contains(&self.cur()) {
            let name = self.scanner.token_value().to_string();
            self.bump()?;
            Ok(name)
        } else {
            Err(self
                .error(format!("identifier expected, but found {}", self.found()))
                .with_expected("identifier".to_string()))
        }
    }

    // ========================================================================
    // Definitions
    // ========================================================================

    fn parse_definition(&mut self) -> Result<Definition, ParseError> {
        let start = self.token_pos();
        let ext_attrs = self.parse_extended_attribute_list()?;
        match self.cur() {
            SyntaxKind::InterfaceKeyword => self.parse_interface(ext_attrs, start, false),
            SyntaxKind::PartialKeyword => {
                self.bump()?;
                self.parse_partial(ext_attrs, start)
            }
            SyntaxKind::DictionaryKeyword => self.parse_dictionary(ext_attrs, start, false),
            SyntaxKind::EnumKeyword => self.parse_enum(ext_attrs, start),
            SyntaxKind::TypedefKeyword => self.parse_typedef(ext_attrs, start),
            SyntaxKind::CallbackKeyword => self.parse_callback(ext_attrs, start),
            SyntaxKind::NamespaceKeyword => self.parse_namespace(ext_attrs, start, false),
            SyntaxKind::Identifier => self.parse_includes(ext_attrs, start),
            _ => Err(self.expected_one_of(
                "interface, partial, dictionary, enum, typedef, callback, namespace, \
                 or an includes statement",
            )),
        }
    }

    fn parse_partial(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        start: u32,
    ) -> Result<Definition, ParseError> {
        match self.cur() {
            SyntaxKind::InterfaceKeyword => self.parse_interface(ext_attrs, start, true),
            SyntaxKind::DictionaryKeyword => self.parse_dictionary(ext_attrs, start, true),
            SyntaxKind::NamespaceKeyword => self.parse_namespace(ext_attrs, start, true),
            _ => Err(self.expected_one_of("interface, dictionary, namespace")),
        }
    }

    /// `interface X : Y { ... };` or `interface mixin M { ... };`
    fn parse_interface(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        start: u32,
        partial: bool,
    ) -> Result<Definition, ParseError> {
        self.expect(SyntaxKind::InterfaceKeyword)?;

        if self.eat(SyntaxKind::MixinKeyword)? {
            let name = self.parse_identifier()?;
            let members = self.parse_members(Body::Mixin)?;
            return Ok(Definition::InterfaceMixin(InterfaceMixin {
                name,
                members,
                partial,
                ext_attrs,
                span: self.span_from(start),
            }));
        }

        let name = self.parse_identifier()?;
        let inheritance = if self.eat(SyntaxKind::ColonToken)? {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let members = self.parse_members(Body::Interface)?;
        Ok(Definition::Interface(Interface {
            name,
            inheritance,
            members,
            partial,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn parse_namespace(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        start: u32,
        partial: bool,
    ) -> Result<Definition, ParseError> {
        self.expect(SyntaxKind::NamespaceKeyword)?;
        let name = self.parse_identifier()?;
        let members = self.parse_members(Body::Namespace)?;
        Ok(Definition::Namespace(Namespace {
            name,
            members,
            partial,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    /// `callback interface I { ... };` or `callback F = RetType (args);`
    fn parse_callback(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        start: u32,
    ) -> Result<Definition, ParseError> {
        self.expect(SyntaxKind::CallbackKeyword)?;

        if self.eat(SyntaxKind::InterfaceKeyword)? {
            let name = self.parse_identifier()?;
            let members = self.parse_members(Body::CallbackInterface)?;
            return Ok(Definition::CallbackInterface(CallbackInterface {
                name,
                members,
                ext_attrs,
                span: self.span_from(start),
            }));
        }

        let name = self.parse_identifier()?;
        self.expect(SyntaxKind::EqualsToken)?;
        let return_type = self.parse_type()?;
        let arguments = self.parse_argument_list()?;
        self.expect(SyntaxKind::SemicolonToken)?;
        Ok(Definition::CallbackFunction(CallbackFunction {
            name,
            return_type,
            arguments,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn parse_dictionary(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        start: u32,
        partial: bool,
    ) -> Result<Definition, ParseError> {
        self.expect(SyntaxKind::DictionaryKeyword)?;
        let name = self.parse_identifier()?;
        let inheritance = if self.eat(SyntaxKind::ColonToken)? {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        self.expect(SyntaxKind::OpenBraceToken)?;
        let mut members = Vec::new();
        while !self.at(SyntaxKind::CloseBraceToken) && !self.at(SyntaxKind::EndOfFileToken) {
            members.push(self.parse_field()?);
        }
        self.expect(SyntaxKind::CloseBraceToken)?;
        self.expect(SyntaxKind::SemicolonToken)?;
        Ok(Definition::Dictionary(Dictionary {
            name,
            inheritance,
            members,
            partial,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn parse_field(&mut self) -> Result<Field, ParseError> {
        let start = self.token_pos();
        let ext_attrs = self.parse_extended_attribute_list()?;
        let required = self.eat(SyntaxKind::RequiredKeyword)?;
        let idl_type = self.parse_type()?;
        let name = self.parse_identifier()?;
        // Only non-required members take a default.
        let default = if !required && self.eat(SyntaxKind::EqualsToken)? {
            Some(self.parse_default_value()?)
        } else {
            None
        };
        self.expect(SyntaxKind::SemicolonToken)?;
        Ok(Field {
            name,
            idl_type,
            required,
            default,
            ext_attrs,
            span: self.span_from(start),
        })
    }

    fn parse_enum(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        start: u32,
    ) -> Result<Definition, ParseError> {
        self.expect(SyntaxKind::EnumKeyword)?;
        let name = self.parse_identifier()?;
        self.expect(SyntaxKind::OpenBraceToken)?;
        let mut values = Vec::new();
        loop {
            if !self.at(SyntaxKind::StringLiteral) {
                return Err(self
                    .error(format!("string literal expected, but found {}", self.found()))
                    .with_expected("string literal".to_string()));
            }
            values.push(EnumValue {
                value: self.scanner.token_value().to_string(),
                span: self.scanner.token_range(),
            });
            self.bump()?;
            if self.eat(SyntaxKind::CommaToken)? {
                // Trailing comma before the closing brace is allowed.
                if self.at(SyntaxKind::CloseBraceToken) {
                    break;
                }
            } else {
                break;
            }
        }
        self.expect(SyntaxKind::CloseBraceToken)?;
        self.expect(SyntaxKind::SemicolonToken)?;
        Ok(Definition::Enum(EnumDefinition {
            name,
            values,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn parse_typedef(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        start: u32,
    ) -> Result<Definition, ParseError> {
        self.expect(SyntaxKind::TypedefKeyword)?;
        let idl_type = self.parse_type()?;
        let name = self.parse_identifier()?;
        self.expect(SyntaxKind::SemicolonToken)?;
        Ok(Definition::Typedef(Typedef {
            name,
            idl_type,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    /// `A includes B;`
    fn parse_includes(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        start: u32,
    ) -> Result<Definition, ParseError> {
        let target = self.parse_identifier()?;
        self.expect(SyntaxKind::IncludesKeyword)?;
        let includes = self.parse_identifier()?;
        self.expect(SyntaxKind::SemicolonToken)?;
        Ok(Definition::Includes(IncludesStatement {
            target,
            includes,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    // ========================================================================
    // Members
    // ========================================================================

    /// `{ member* } ;`
    fn parse_members(&mut self, body: Body) -> Result<Vec<Member>, ParseError> {
        self.expect(SyntaxKind::OpenBraceToken)?;
        let mut members = Vec::new();
        while !self.at(SyntaxKind::CloseBraceToken) && !self.at(SyntaxKind::EndOfFileToken) {
            members.push(self.parse_member(body)?);
        }
        self.expect(SyntaxKind::CloseBraceToken)?;
        self.expect(SyntaxKind::SemicolonToken)?;
        Ok(members)
    }

    fn parse_member(&mut self, body: Body) -> Result<Member, ParseError> {
        let start = self.token_pos();
        let ext_attrs = self.parse_extended_attribute_list()?;

        match self.cur() {
            SyntaxKind::ConstKeyword => self.parse_const(ext_attrs, start),

            SyntaxKind::ConstructorKeyword if body == Body::Interface => {
                self.bump()?;
                let arguments = self.parse_argument_list()?;
                self.expect(SyntaxKind::SemicolonToken)?;
                Ok(Member::Constructor(Constructor {
                    arguments,
                    ext_attrs,
                    span: self.span_from(start),
                }))
            }

            SyntaxKind::StaticKeyword if body == Body::Interface => {
                self.bump()?;
                if self.at(SyntaxKind::ReadonlyKeyword) || self.at(SyntaxKind::AttributeKeyword) {
                    let readonly = self.eat(SyntaxKind::ReadonlyKeyword)?;
                    self.parse_attribute(
                        ext_attrs,
                        start,
                        Some(AttributeSpecial::Static),
                        readonly,
                        false,
                    )
                } else {
                    self.parse_operation(ext_attrs, start, Some(OperationSpecial::Static))
                }
            }

            SyntaxKind::StringifierKeyword if body != Body::Namespace => {
                self.bump()?;
                if self.eat(SyntaxKind::SemicolonToken)? {
                    // Bare `stringifier;`
                    return Ok(Member::Operation(Operation {
                        name: None,
                        special: Some(OperationSpecial::Stringifier),
                        return_type: None,
                        arguments: Vec::new(),
                        ext_attrs,
                        span: self.span_from(start),
                    }));
                }
                if self.at(SyntaxKind::ReadonlyKeyword) || self.at(SyntaxKind::AttributeKeyword) {
                    let readonly = self.eat(SyntaxKind::ReadonlyKeyword)?;
                    self.parse_attribute(
                        ext_attrs,
                        start,
                        Some(AttributeSpecial::Stringifier),
                        readonly,
                        false,
                    )
                } else {
                    self.parse_operation(ext_attrs, start, Some(OperationSpecial::Stringifier))
                }
            }

            SyntaxKind::ReadonlyKeyword if body != Body::CallbackInterface => {
                self.bump()?;
                match self.cur() {
                    SyntaxKind::AttributeKeyword => {
                        self.parse_attribute(ext_attrs, start, None, true, false)
                    }
                    SyntaxKind::MaplikeKeyword if body == Body::Interface => {
                        self.parse_maplike(ext_attrs, start, true)
                    }
                    SyntaxKind::SetlikeKeyword if body == Body::Interface => {
                        self.parse_setlike(ext_attrs, start, true)
                    }
                    _ => Err(self.expected_one_of("attribute, maplike, setlike")),
                }
            }

            SyntaxKind::InheritKeyword if body == Body::Interface => {
                self.bump()?;
                if !self.at(SyntaxKind::AttributeKeyword) {
                    return Err(self
                        .error(format!("'attribute' expected, but found {}", self.found()))
                        .with_expected("'attribute'".to_string()));
                }
                self.parse_attribute(ext_attrs, start, None, false, true)
            }

            SyntaxKind::AttributeKeyword if body != Body::CallbackInterface => {
                self.parse_attribute(ext_attrs, start, None, false, false)
            }

            SyntaxKind::IterableKeyword if body == Body::Interface => {
                self.parse_iterable(ext_attrs, start, false)
            }
            SyntaxKind::AsyncKeyword if body == Body::Interface => {
                self.bump()?;
                if !self.at(SyntaxKind::IterableKeyword) {
                    return Err(self
                        .error(format!("'iterable' expected, but found {}", self.found()))
                        .with_expected("'iterable'".to_string()));
                }
                self.parse_iterable(ext_attrs, start, true)
            }
            SyntaxKind::MaplikeKeyword if body == Body::Interface => {
                self.parse_maplike(ext_attrs, start, false)
            }
            SyntaxKind::SetlikeKeyword if body == Body::Interface => {
                self.parse_setlike(ext_attrs, start, false)
            }

            SyntaxKind::GetterKeyword if body == Body::Interface => {
                self.bump()?;
                self.parse_operation(ext_attrs, start, Some(OperationSpecial::Getter))
            }
            SyntaxKind::SetterKeyword if body == Body::Interface => {
                self.bump()?;
                self.parse_operation(ext_attrs, start, Some(OperationSpecial::Setter))
            }
            SyntaxKind::DeleterKeyword if body == Body::Interface => {
                self.bump()?;
                self.parse_operation(ext_attrs, start, Some(OperationSpecial::Deleter))
            }

            _ => self.parse_operation(ext_attrs, start, None),
        }
    }

    fn parse_const(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        start: u32,
    ) -> Result<Member, ParseError> {
        self.expect(SyntaxKind::ConstKeyword)?;
        // ConstType is restricted to a primitive type or a type name.
        let idl_type = if self.at(SyntaxKind::Identifier) {
            let name = self.scanner.token_value().to_string();
            self.bump()?;
            Type::named(name)
        } else {
            Type::primitive(self.parse_primitive_type()?)
        };
        let name = self.parse_identifier()?;
        self.expect(SyntaxKind::EqualsToken)?;
        let value = self.parse_const_value()?;
        self.expect(SyntaxKind::SemicolonToken)?;
        Ok(Member::Const(Const {
            name,
            idl_type,
            value,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn parse_attribute(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        start: u32,
        special: Option<AttributeSpecial>,
        readonly: bool,
        inherit: bool,
    ) -> Result<Member, ParseError> {
        self.expect(SyntaxKind::AttributeKeyword)?;
        let idl_type = self.parse_type()?;
        // `async` and `required` double as attribute names.
        let name =
            self.parse_name_allowing(&[SyntaxKind::AsyncKeyword, SyntaxKind::RequiredKeyword])?;
        self.expect(SyntaxKind::SemicolonToken)?;
        Ok(Member::Attribute(Attribute {
            name,
            idl_type,
            special,
            readonly,
            inherit,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    /// The tail of a regular or special operation: return type, optional
    /// name, argument list. Special operations may omit the name.
    fn parse_operation(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        start: u32,
        special: Option<OperationSpecial>,
    ) -> Result<Member, ParseError> {
        let return_type = self.parse_type()?;
        let name = if self.at(SyntaxKind::OpenParenToken)
            && matches!(
                special,
                Some(OperationSpecial::Getter)
                    | Some(OperationSpecial::Setter)
                    | Some(OperationSpecial::Deleter)
                    | Some(OperationSpecial::Stringifier)
            ) {
            None
        } else {
            // `includes` doubles as an operation name.
            Some(self.parse_name_allowing(&[SyntaxKind::IncludesKeyword])?)
        };
        let arguments = self.parse_argument_list()?;
        self.expect(SyntaxKind::SemicolonToken)?;
        Ok(Member::Operation(Operation {
            name,
            special,
            return_type: Some(return_type),
            arguments,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn parse_iterable(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        start: u32,
        is_async: bool,
    ) -> Result<Member, ParseError> {
        self.expect(SyntaxKind::IterableKeyword)?;
        self.expect(SyntaxKind::LessThanToken)?;
        let first = self.parse_type()?;
        let (key_type, value_type) = if self.eat(SyntaxKind::CommaToken)? {
            (Some(first), self.parse_type()?)
        } else {
            (None, first)
        };
        self.expect(SyntaxKind::GreaterThanToken)?;
        let arguments = if is_async && self.at(SyntaxKind::OpenParenToken) {
            self.parse_argument_list()?
        } else {
            Vec::new()
        };
        self.expect(SyntaxKind::SemicolonToken)?;
        Ok(Member::Iterable(Iterable {
            is_async,
            key_type,
            value_type,
            arguments,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn parse_maplike(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        start: u32,
        readonly: bool,
    ) -> Result<Member, ParseError> {
        self.expect(SyntaxKind::MaplikeKeyword)?;
        self.expect(SyntaxKind::LessThanToken)?;
        let key_type = self.parse_type()?;
        self.expect(SyntaxKind::CommaToken)?;
        let value_type = self.parse_type()?;
        self.expect(SyntaxKind::GreaterThanToken)?;
        self.expect(SyntaxKind::SemicolonToken)?;
        Ok(Member::Maplike(Maplike {
            readonly,
            key_type,
            value_type,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn parse_setlike(
        &mut self,
        ext_attrs: Vec<ExtendedAttribute>,
        start: u32,
        readonly: bool,
    ) -> Result<Member, ParseError> {
        self.expect(SyntaxKind::SetlikeKeyword)?;
        self.expect(SyntaxKind::LessThanToken)?;
        let value_type = self.parse_type()?;
        self.expect(SyntaxKind::GreaterThanToken)?;
        self.expect(SyntaxKind::SemicolonToken)?;
        Ok(Member::Setlike(Setlike {
            readonly,
            value_type,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    // ========================================================================
    // Arguments
    // ========================================================================

    /// `( argument, ... )`
    fn parse_argument_list(&mut self) -> Result<Vec<Argument>, ParseError> {
        self.expect(SyntaxKind::OpenParenToken)?;
        let mut arguments = Vec::new();
        if !self.at(SyntaxKind::CloseParenToken) {
            loop {
                arguments.push(self.parse_argument()?);
                if !self.eat(SyntaxKind::CommaToken)? {
                    break;
                }
            }
        }
        self.expect(SyntaxKind::CloseParenToken)?;
        Ok(arguments)
    }

    fn parse_argument(&mut self) -> Result<Argument, ParseError> {
        let start = self.token_pos();
        let ext_attrs = self.parse_extended_attribute_list()?;
        let optional = self.eat(SyntaxKind::OptionalKeyword)?;
        let idl_type = self.parse_type()?;
        // Only non-optional arguments may be variadic.
        let variadic = if !optional {
            self.eat(SyntaxKind::DotDotDotToken)?
        } else {
            false
        };
        let name = self.parse_argument_name()?;
        let default = if optional && self.eat(SyntaxKind::EqualsToken)? {
            Some(self.parse_default_value()?)
        } else {
            None
        };
        Ok(Argument {
            name,
            idl_type,
            optional,
            variadic,
            default,
            ext_attrs,
            span: self.span_from(start),
        })
    }

    fn parse_argument_name(&mut self) -> Result<String, ParseError> {
        if self.at(SyntaxKind::Identifier) || self.cur().is_argument_name_keyword() {
            let name = self.scanner.token_value().to_string();
            self.bump()?;
            Ok(name)
        } else {
            Err(self
                .error(format!("argument name expected, but found {}", self.found()))
                .with_expected("identifier".to_string()))
        }
    }

    // ========================================================================
    // Extended attributes
    // ========================================================================

    /// `[ Attr, Attr, ... ]` or nothing.
    fn parse_extended_attribute_list(&mut self) -> Result<Vec<ExtendedAttribute>, ParseError> {
        if !self.eat(SyntaxKind::OpenBracketToken)? {
            return Ok(Vec::new());
        }
        let mut attrs = Vec::new();
        loop {
            attrs.push(self.parse_extended_attribute()?);
            if !self.eat(SyntaxKind::CommaToken)? {
                break;
            }
        }
        self.expect(SyntaxKind::CloseBracketToken)?;
        Ok(attrs)
    }

    /// One attribute: name, optional `= rhs`, optional argument list.
    /// `[Name]`, `[Name=Ident]`, `[Name=(A,B)]`, `[Name="s"]`, `[Name=3]`,
    /// `[Name=*]`, `[Name(args)]`, `[Name=Ident(args)]`.
    fn parse_extended_attribute(&mut self) -> Result<ExtendedAttribute, ParseError> {
        let start = self.token_pos();
        let name = self.parse_identifier()?;
        let mut rhs = None;
        let mut arguments = None;

        if self.eat(SyntaxKind::EqualsToken)? {
            rhs = Some(self.parse_ext_attr_rhs()?);
            if self.at(SyntaxKind::OpenParenToken) {
                // Named argument list: [LegacyFactoryFunction=Image(DOMString src)]
                if !matches!(rhs, Some(ExtAttrRhs::Identifier(_))) {
                    return Err(self.error(
                        "a named argument list requires an identifier right-hand side".to_string(),
                    ));
                }
                arguments = Some(self.parse_argument_list()?);
            }
        } else if self.at(SyntaxKind::OpenParenToken) {
            arguments = Some(self.parse_argument_list()?);
        }

        Ok(ExtendedAttribute {
            name,
            rhs,
            arguments,
            span: self.span_from(start),
        })
    }

    fn parse_ext_attr_rhs(&mut self) -> Result<ExtAttrRhs, ParseError> {
        match self.cur() {
            SyntaxKind::Identifier => {
                let value = self.scanner.token_value().to_string();
                self.bump()?;
                Ok(ExtAttrRhs::Identifier(value))
            }
            SyntaxKind::StringLiteral => {
                let value = self.scanner.token_value().to_string();
                self.bump()?;
                Ok(ExtAttrRhs::String(value))
            }
            SyntaxKind::IntegerLiteral => {
                let value = self.scanner.token_value().to_string();
                self.bump()?;
                Ok(ExtAttrRhs::Integer(value))
            }
            SyntaxKind::DecimalLiteral => {
                let value = self.scanner.token_value().to_string();
                self.bump()?;
                Ok(ExtAttrRhs::Decimal(value))
            }
            SyntaxKind::AsteriskToken => {
                self.bump()?;
                Ok(ExtAttrRhs::Wildcard)
            }
            SyntaxKind::OpenParenToken => {
                self.bump()?;
                if self.at(SyntaxKind::StringLiteral) {
                    let mut values = Vec::new();
                    loop {
                        if !self.at(SyntaxKind::StringLiteral) {
                            return Err(self.error(format!(
                                "string literal expected, but found {}",
                                self.found()
                            )));
                        }
                        values.push(self.scanner.token_value().to_string());
                        self.bump()?;
                        if !self.eat(SyntaxKind::CommaToken)? {
                            break;
                        }
                    }
                    self.expect(SyntaxKind::CloseParenToken)?;
                    Ok(ExtAttrRhs::StringList(values))
                } else {
                    let mut values = Vec::new();
                    loop {
                        values.push(self.parse_identifier()?);
                        if !self.eat(SyntaxKind::CommaToken)? {
                            break;
                        }
                    }
                    self.expect(SyntaxKind::CloseParenToken)?;
                    Ok(ExtAttrRhs::IdentifierList(values))
                }
            }
            _ => Err(self.expected_one_of(
                "an identifier, a string, a number, '*', or a parenthesized list",
            )),
        }
    }

    // ========================================================================
    // Values
    // ========================================================================

    fn parse_const_value(&mut self) -> Result<Value, ParseError> {
        match self.cur() {
            SyntaxKind::TrueKeyword => {
                self.bump()?;
                Ok(Value::Boolean { value: true })
            }
            SyntaxKind::FalseKeyword => {
                self.bump()?;
                Ok(Value::Boolean { value: false })
            }
            SyntaxKind::IntegerLiteral => {
                let value = self.scanner.token_value().to_string();
                self.bump()?;
                Ok(Value::Integer { value })
            }
            SyntaxKind::DecimalLiteral => {
                let value = self.scanner.token_value().to_string();
                self.bump()?;
                Ok(Value::Decimal { value })
            }
            SyntaxKind::InfinityKeyword => {
                self.bump()?;
                Ok(Value::Infinity { negative: false })
            }
            SyntaxKind::MinusToken => {
                self.bump()?;
                self.expect(SyntaxKind::InfinityKeyword)?;
                Ok(Value::Infinity { negative: true })
            }
            SyntaxKind::NaNKeyword => {
                self.bump()?;
                Ok(Value::NaN)
            }
            _ => Err(self.expected_one_of("a boolean, a number, Infinity, -Infinity, or NaN")),
        }
    }

    /// Default values are const values plus strings, `null`, `undefined`,
    /// `[]`, and `{}`.
    fn parse_default_value(&mut self) -> Result<Value, ParseError> {
        match self.cur() {
            SyntaxKind::StringLiteral => {
                let value = self.scanner.token_value().to_string();
                self.bump()?;
                Ok(Value::String { value })
            }
            SyntaxKind::NullKeyword => {
                self.bump()?;
                Ok(Value::Null)
            }
            SyntaxKind::UndefinedKeyword => {
                self.bump()?;
                Ok(Value::Undefined)
            }
            SyntaxKind::OpenBracketToken => {
                self.bump()?;
                self.expect(SyntaxKind::CloseBracketToken)?;
                Ok(Value::EmptySequence)
            }
            SyntaxKind::OpenBraceToken => {
                self.bump()?;
                self.expect(SyntaxKind::CloseBraceToken)?;
                Ok(Value::EmptyDictionary)
            }
            _ => self.parse_const_value(),
        }
    }

    // ========================================================================
    // Types
    // ========================================================================

    /// Parse a type, including unions and the `?` nullable suffix. The
    /// suffix binds to the whole preceding type expression.
    fn parse_type(&mut self) -> Result<Type, ParseError> {
        if self.at(SyntaxKind::OpenParenToken) {
            return self.parse_union_type();
        }
        let ty = self.parse_single_type()?;
        self.parse_nullable_suffix(ty)
    }

    fn parse_nullable_suffix(&mut self, ty: Type) -> Result<Type, ParseError> {
        if self.eat(SyntaxKind::QuestionToken)? {
            Ok(Type::nullable(ty))
        } else {
            Ok(ty)
        }
    }

    /// `( T or U or ... )` with at least two members. Members may
    /// themselves be unions or nullable.
    fn parse_union_type(&mut self) -> Result<Type, ParseError> {
        self.expect(SyntaxKind::OpenParenToken)?;
        let mut members = vec![self.parse_type()?];
        self.expect(SyntaxKind::OrKeyword)?;
        members.push(self.parse_type()?);
        while self.eat(SyntaxKind::OrKeyword)? {
            members.push(self.parse_type()?);
        }
        self.expect(SyntaxKind::CloseParenToken)?;
        self.parse_nullable_suffix(Type::Union { members })
    }

    fn parse_single_type(&mut self) -> Result<Type, ParseError> {
        match self.cur() {
            SyntaxKind::SequenceKeyword => {
                self.bump()?;
                Ok(Type::Sequence {
                    element: Box::new(self.parse_angle_type()?),
                })
            }
            SyntaxKind::FrozenArrayKeyword => {
                self.bump()?;
                Ok(Type::FrozenArray {
                    element: Box::new(self.parse_angle_type()?),
                })
            }
            SyntaxKind::ObservableArrayKeyword => {
                self.bump()?;
                Ok(Type::ObservableArray {
                    element: Box::new(self.parse_angle_type()?),
                })
            }
            SyntaxKind::PromiseKeyword => {
                self.bump()?;
                Ok(Type::Promise {
                    element: Box::new(self.parse_angle_type()?),
                })
            }
            SyntaxKind::RecordKeyword => {
                self.bump()?;
                self.expect(SyntaxKind::LessThanToken)?;
                let key_span = self.scanner.token_range();
                let key_location = self.scanner.token_location();
                let key = self.parse_primitive_type()?;
                if !key.is_string_type() {
                    return Err(ParseError::syntax(
                        "record keys must be DOMString, ByteString, or USVString".to_string(),
                        key_span,
                        key_location,
                    ));
                }
                self.expect(SyntaxKind::CommaToken)?;
                let value = Box::new(self.parse_type()?);
                self.expect(SyntaxKind::GreaterThanToken)?;
                Ok(Type::Record { key, value })
            }
            SyntaxKind::Identifier => {
                let name = self.scanner.token_value().to_string();
                self.bump()?;
                Ok(Type::named(name))
            }
            _ => Ok(Type::primitive(self.parse_primitive_type()?)),
        }
    }

    /// `< T >`
    fn parse_angle_type(&mut self) -> Result<Type, ParseError> {
        self.expect(SyntaxKind::LessThanToken)?;
        let ty = self.parse_type()?;
        self.expect(SyntaxKind::GreaterThanToken)?;
        Ok(ty)
    }

    fn parse_primitive_type(&mut self) -> Result<PrimitiveType, ParseError> {
        let ty = match self.cur() {
            SyntaxKind::UnsignedKeyword => {
                self.bump()?;
                match self.cur() {
                    SyntaxKind::ShortKeyword => {
                        self.bump()?;
                        return Ok(PrimitiveType::UnsignedShort);
                    }
                    SyntaxKind::LongKeyword => {
                        self.bump()?;
                        return Ok(if self.eat(SyntaxKind::LongKeyword)? {
                            PrimitiveType::UnsignedLongLong
                        } else {
                            PrimitiveType::UnsignedLong
                        });
                    }
                    _ => return Err(self.expected_one_of("short, long")),
                }
            }
            SyntaxKind::UnrestrictedKeyword => {
                self.bump()?;
                match self.cur() {
                    SyntaxKind::FloatKeyword => {
                        self.bump()?;
                        return Ok(PrimitiveType::UnrestrictedFloat);
                    }
                    SyntaxKind::DoubleKeyword => {
                        self.bump()?;
                        return Ok(PrimitiveType::UnrestrictedDouble);
                    }
                    _ => return Err(self.expected_one_of("float, double")),
                }
            }
            SyntaxKind::LongKeyword => {
                self.bump()?;
                return Ok(if self.eat(SyntaxKind::LongKeyword)? {
                    PrimitiveType::LongLong
                } else {
                    PrimitiveType::Long
                });
            }
            SyntaxKind::AnyKeyword => PrimitiveType::Any,
            SyntaxKind::UndefinedKeyword | SyntaxKind::VoidKeyword => PrimitiveType::Undefined,
            SyntaxKind::BooleanKeyword => PrimitiveType::Boolean,
            SyntaxKind::ByteKeyword => PrimitiveType::Byte,
            SyntaxKind::OctetKeyword => PrimitiveType::Octet,
            SyntaxKind::ShortKeyword => PrimitiveType::Short,
            SyntaxKind::FloatKeyword => PrimitiveType::Float,
            SyntaxKind::DoubleKeyword => PrimitiveType::Double,
            SyntaxKind::BigintKeyword => PrimitiveType::Bigint,
            SyntaxKind::DOMStringKeyword => PrimitiveType::DOMString,
            SyntaxKind::ByteStringKeyword => PrimitiveType::ByteString,
            SyntaxKind::USVStringKeyword => PrimitiveType::USVString,
            SyntaxKind::ObjectKeyword => PrimitiveType::Object,
            SyntaxKind::SymbolKeyword => PrimitiveType::Symbol,
            _ => {
                return Err(self
                    .error(format!("type expected, but found {}", self.found()))
                    .with_expected("type".to_string()))
            }
        };
        self.bump()?;
        Ok(ty)
    }
}
