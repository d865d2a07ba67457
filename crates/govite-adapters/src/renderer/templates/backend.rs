//! Backend skeleton: gin server, config, routes, middleware, models,
//! module registry, storage and logging stubs.

pub const GO_MOD: &str = r##"module backend

go 1.24

require (
	github.com/gin-gonic/gin v1.9.1
	github.com/joho/godotenv v1.5.1
)
"##;

pub const SERVER_MAIN: &str = r##"package main

import (
	"log"
	"os"

	"backend/config"
	"backend/internal/api"
	"github.com/gin-gonic/gin"
	"github.com/joho/godotenv"
)

func main() {
	if err := godotenv.Load(); err != nil {
		log.Println("No .env file found")
	}

	if err := config.LoadConfig(); err != nil {
		log.Fatal("Failed to load config:", err)
	}
	cfg := config.GetConfig()

	router := gin.Default()
	router.Use(api.CORSMiddleware())
	api.SetupRoutes(router)

	port := os.Getenv("PORT")
	if port == "" {
		port = "{{BACKEND_PORT}}"
	}

	log.Printf("Backend server starting on port %s", port)
	if err := router.Run(":" + port); err != nil {
		log.Fatal("Failed to start server:", err)
	}
}
"##;

pub const CONFIG: &str = r##"package config

import (
	"os"
	"strconv"
)

type Config struct {
	FrontendPort int
	BackendPort  int
	LogLevel     string
}

var globalConfig Config

func LoadConfig() error {
	frontendPort, _ := strconv.Atoi(getEnv("FRONTEND_PORT", "{{PORT}}"))
	backendPort, _ := strconv.Atoi(getEnv("BACKEND_PORT", "{{BACKEND_PORT}}"))

	globalConfig = Config{
		FrontendPort: frontendPort,
		BackendPort:  backendPort,
		LogLevel:     getEnv("LOG_LEVEL", "info"),
	}

	return nil
}

func GetConfig() Config {
	return globalConfig
}

func getEnv(key, defaultValue string) string {
	if value := os.Getenv(key); value != "" {
		return value
	}
	return defaultValue
}
"##;

pub const ROUTES: &str = r##"package api

import (
	"backend/internal/api/handlers"
	"backend/internal/api/middleware"
	"github.com/gin-gonic/gin"
)

func SetupRoutes(router *gin.Engine) {
	router.GET("/health", func(c *gin.Context) {
		c.JSON(200, gin.H{"status": "ok"})
	})

	v1 := router.Group("/api/v1")
	v1.Use(middleware.Logger())
	{
		v1.GET("/items", handlers.ListItems)
		v1.POST("/items", handlers.CreateItem)
		v1.GET("/items/:id", handlers.GetItem)
		v1.PUT("/items/:id", handlers.UpdateItem)
		v1.DELETE("/items/:id", handlers.DeleteItem)
	}
}

func CORSMiddleware() gin.HandlerFunc {
	return func(c *gin.Context) {
		c.Writer.Header().Set("Access-Control-Allow-Origin", "*")
		c.Writer.Header().Set("Access-Control-Allow-Credentials", "true")
		c.Writer.Header().Set("Access-Control-Allow-Headers", "Content-Type, Authorization")
		c.Writer.Header().Set("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS")

		if c.Request.Method == "OPTIONS" {
			c.AbortWithStatus(204)
			return
		}

		c.Next()
	}
}
"##;

pub const HANDLERS: &str = r##"package handlers

import (
	"github.com/gin-gonic/gin"
)

func ListItems(c *gin.Context) {
	c.JSON(200, gin.H{"items": []string{}})
}

func CreateItem(c *gin.Context) {
	c.JSON(201, gin.H{"message": "Item created"})
}

func GetItem(c *gin.Context) {
	id := c.Param("id")
	c.JSON(200, gin.H{"id": id})
}

func UpdateItem(c *gin.Context) {
	id := c.Param("id")
	c.JSON(200, gin.H{"id": id, "message": "Item updated"})
}

func DeleteItem(c *gin.Context) {
	id := c.Param("id")
	c.JSON(200, gin.H{"id": id, "message": "Item deleted"})
}
"##;

pub const CORS_MIDDLEWARE: &str = r##"package middleware

import "github.com/gin-gonic/gin"

func CORS() gin.HandlerFunc {
	return func(c *gin.Context) {
		c.Writer.Header().Set("Access-Control-Allow-Origin", "*")
		c.Writer.Header().Set("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS")
		c.Writer.Header().Set("Access-Control-Allow-Headers", "Content-Type, Authorization")

		if c.Request.Method == "OPTIONS" {
			c.AbortWithStatus(204)
			return
		}

		c.Next()
	}
}
"##;

pub const LOGGER_MIDDLEWARE: &str = r##"package middleware

import (
	"log"
	"time"

	"github.com/gin-gonic/gin"
)

func Logger() gin.HandlerFunc {
	return func(c *gin.Context) {
		start := time.Now()
		path := c.Request.URL.Path

		c.Next()

		latency := time.Since(start)
		status := c.Writer.Status()

		log.Printf("[%s] %s %d %v", c.Request.Method, path, status, latency)
	}
}
"##;

pub const PIPELINE_MODEL: &str = r##"package models

import "time"

type Pipeline struct {
	ID             string    `json:"id"`
	Name           string    `json:"name"`
	Status         string    `json:"status"`
	CurrentStep    int       `json:"current_step"`
	CompletedSteps []int     `json:"completed_steps"`
	CreatedAt      time.Time `json:"created_at"`
	UpdatedAt      time.Time `json:"updated_at"`
}
"##;

pub const PROJECT_MODEL: &str = r##"package models

import "time"

type Project struct {
	ID          string    `json:"id"`
	Name        string    `json:"name"`
	Description string    `json:"description"`
	Owner       string    `json:"owner"`
	CreatedAt   time.Time `json:"created_at"`
	UpdatedAt   time.Time `json:"updated_at"`
}
"##;

pub const USER_MODEL: &str = r##"package models

import "time"

type User struct {
	ID        string    `json:"id"`
	Email     string    `json:"email"`
	Name      string    `json:"name"`
	CreatedAt time.Time `json:"created_at"`
	UpdatedAt time.Time `json:"updated_at"`
}
"##;

/// Name → implementation registry for pluggable business-logic modules;
/// locally imported modules register themselves here.
pub const MODULES_MANAGER: &str = r##"package modules

type Module interface {
	Name() string
	Execute(input map[string]interface{}) (map[string]interface{}, error)
	Validate(config map[string]interface{}) error
}

type Manager struct {
	modules map[string]Module
}

func NewManager() *Manager {
	return &Manager{
		modules: make(map[string]Module),
	}
}

func (m *Manager) Register(name string, module Module) {
	m.modules[name] = module
}

func (m *Manager) Get(name string) (Module, bool) {
	module, ok := m.modules[name]
	return module, ok
}

func (m *Manager) List() []string {
	names := make([]string, 0, len(m.modules))
	for name := range m.modules {
		names = append(names, name)
	}
	return names
}
"##;

pub const BUILTIN_MODULES: &str = r##"package modules

type ExampleModule struct{}

func (m *ExampleModule) Name() string {
	return "example"
}

func (m *ExampleModule) Execute(input map[string]interface{}) (map[string]interface{}, error) {
	return map[string]interface{}{
		"status": "success",
		"data":   input,
	}, nil
}

func (m *ExampleModule) Validate(config map[string]interface{}) error {
	return nil
}

func LoadBuiltinModules(manager *Manager) {
	manager.Register("example", &ExampleModule{})
}
"##;

pub const DATABASE: &str = r##"package storage

type Database struct {
	// Add your database implementation here
}

func NewDatabase() (*Database, error) {
	return &Database{}, nil
}

func (db *Database) Close() error {
	return nil
}
"##;

pub const LOGGER: &str = r##"package utils

import (
	"log"
	"os"
)

var Logger = log.New(os.Stdout, "[APP] ", log.LstdFlags|log.Lshortfile)

func Info(v ...interface{}) {
	Logger.Println(v...)
}

func Error(v ...interface{}) {
	Logger.Println(v...)
}
"##;
